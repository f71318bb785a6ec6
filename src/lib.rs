//! scrapedocs — scrape Doxygen XML into a lookup table of API documentation.
//!
//! Pipeline:
//!
//! 1. **Remap** — load `--remap` rules from `.rsp` files ([`remap`])
//! 2. **Parse** — read each Doxygen XML file into an element tree ([`doxygen`])
//! 3. **Extract** — turn structs, functions, enums and typedefs into
//!    [`ApiDetails`] records keyed by their binding names ([`extract`], [`names`])
//! 4. **Write** — encode the sorted table as MessagePack or JSON ([`output`])

pub mod doxygen;
pub mod error;
pub mod extract;
pub mod logging;
pub mod model;
pub mod names;
pub mod output;
pub mod remap;
pub mod scrape;

pub use error::{OutputError, ScrapeError};
pub use extract::Extractor;
pub use model::{ApiDetails, ApiTable};
pub use names::NameResolver;
pub use remap::RemapTable;

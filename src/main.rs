//! scrapedocs — build the API documentation table for the bindings.
//!
//! `scrapedocs <xml-directory> <output-file> <rsp-file> [<rsp-file>...]`
//!
//! Reads Doxygen XML, renames symbols with the `--remap` rules the binding
//! generator uses, and writes one MessagePack table keyed by binding name.

use anyhow::{bail, Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use scrapedocs::names::DEFAULT_STRIP_PREFIX;
use scrapedocs::scrape::{self, DEFAULT_HELP_LINK};
use scrapedocs::{logging, output, ApiTable, Extractor, NameResolver, RemapTable};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "scrapedocs",
    version,
    about = "Scrape Doxygen XML into a MessagePack table of API documentation"
)]
struct Cli {
    /// Path to Doxygen XML output directory
    xml_dir: PathBuf,

    /// Path to the output file
    output: PathBuf,

    /// One or more .rsp files containing --remap rules
    #[arg(required = true, num_args = 1..)]
    rsp_files: Vec<PathBuf>,

    /// Help link attached to every documented API
    #[arg(long, default_value = DEFAULT_HELP_LINK)]
    help_link: String,

    /// Prefix stripped from type names without a remap rule
    #[arg(long, default_value = DEFAULT_STRIP_PREFIX)]
    strip_prefix: String,

    /// Output format: msgpack (default), json
    #[arg(short = 'f', long, default_value = "msgpack")]
    format: String,

    /// Log every resolved symbol
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            // Usage errors exit 1, not clap's default 2
            let _ = e.print();
            std::process::exit(1);
        }
    };

    logging::init(cli.verbose);
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    if !cli.xml_dir.is_dir() {
        bail!("XML directory not found: {}", cli.xml_dir.display());
    }
    let encoder = output::create_encoder(&cli.format)?;

    let remap = RemapTable::load(&cli.rsp_files);
    let extractor = Extractor::new(
        NameResolver::new(&remap, &cli.strip_prefix),
        &cli.help_link,
    );

    let mut table = ApiTable::new();
    let summary = scrape::scrape_dir(&cli.xml_dir, &extractor, &mut table)
        .with_context(|| format!("failed to list {}", cli.xml_dir.display()))?;
    info!(
        "found documentation for {} APIs ({} files, {} failed)",
        table.len(),
        summary.processed,
        summary.failed
    );

    output::write_table(&cli.output, &table, encoder.as_ref())
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    info!("written to {}", cli.output.display());

    Ok(())
}

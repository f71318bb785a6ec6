//! MessagePack encoder — the artifact the bindings load at build time.
//!
//! Records are written as positional arrays (rmp-serde's default struct
//! encoding), matching consumers that key `ApiDetails` members by index.

use crate::error::OutputError;
use crate::model::ApiTable;
use crate::output::Encoder;

pub struct MessagePackEncoder;

impl Encoder for MessagePackEncoder {
    fn encode(&self, table: &ApiTable) -> Result<Vec<u8>, OutputError> {
        Ok(rmp_serde::to_vec(table)?)
    }

    fn file_extension(&self) -> &str {
        "msgpack"
    }
}

/// Decode a table previously written by [`MessagePackEncoder`].
pub fn decode(bytes: &[u8]) -> Result<ApiTable, rmp_serde::decode::Error> {
    rmp_serde::from_slice(bytes)
}

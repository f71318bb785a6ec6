//! JSON encoder — human-readable view of the same table, for inspection
//! and diffing between runs.

use crate::error::OutputError;
use crate::model::ApiTable;
use crate::output::Encoder;

pub struct JsonEncoder;

impl Encoder for JsonEncoder {
    fn encode(&self, table: &ApiTable) -> Result<Vec<u8>, OutputError> {
        let mut out = serde_json::to_vec_pretty(table)?;
        out.push(b'\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

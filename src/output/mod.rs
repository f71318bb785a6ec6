//! Output module — trait-based format dispatch.

pub mod json;
pub mod msgpack;

use crate::error::OutputError;
use crate::model::ApiTable;
use std::fs;
use std::path::Path;

/// Trait for encoding the result table into a specific output format.
pub trait Encoder {
    fn encode(&self, table: &ApiTable) -> Result<Vec<u8>, OutputError>;
    fn file_extension(&self) -> &str;
}

/// Create an encoder for the given format name.
pub fn create_encoder(format: &str) -> Result<Box<dyn Encoder>, OutputError> {
    match format {
        "msgpack" | "messagepack" => Ok(Box::new(msgpack::MessagePackEncoder)),
        "json" => Ok(Box::new(json::JsonEncoder)),
        _ => Err(OutputError::UnknownFormat(format.to_string())),
    }
}

/// Encode `table` and write it to `path`, creating parent directories.
///
/// The table is fully encoded before the file is created, so an encoding
/// failure leaves nothing on disk.
pub fn write_table(path: &Path, table: &ApiTable, encoder: &dyn Encoder) -> Result<(), OutputError> {
    let bytes = encoder.encode(table)?;

    let io_err = |source: std::io::Error| OutputError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, bytes).map_err(io_err)
}

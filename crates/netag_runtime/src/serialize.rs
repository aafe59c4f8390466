//! Entity sidecar serialization using `MessagePack`.
//!
//! Stripping and restoring usually run as separate processes on either side
//! of the external transformation. The sidecar carries each line's entity
//! list from one to the other.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use netag_foundation::{EntityList, Error, ErrorKind, Result};
use serde::{Deserialize, Serialize};

/// The entities of one input line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineEntities {
    /// 1-based line number in the stripped stream.
    pub line_number: usize,
    /// Entities in extraction order.
    pub entities: EntityList,
}

/// Serializes a sidecar to bytes using `MessagePack` format.
///
/// Uses named serialization to preserve struct field names.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(lines: &[LineEntities]) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(lines).map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))
}

/// Deserializes a sidecar from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if deserialization fails.
pub fn from_bytes(bytes: &[u8]) -> Result<Vec<LineEntities>> {
    rmp_serde::from_slice(bytes).map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))
}

/// Saves a sidecar to a file.
///
/// Creates the file if it doesn't exist, or overwrites it if it does.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to,
/// or if serialization fails.
pub fn save_to_file<P: AsRef<Path>>(lines: &[LineEntities], path: P) -> Result<()> {
    let path = path.as_ref();
    let io_error = |what: &str, e: std::io::Error| {
        Error::new(ErrorKind::Io(format!("failed to {what} '{}': {e}", path.display())))
    };

    let file = File::create(path).map_err(|e| io_error("create file", e))?;
    let mut writer = BufWriter::new(file);
    let bytes = to_bytes(lines)?;

    writer.write_all(&bytes).map_err(|e| io_error("write to file", e))?;
    writer.flush().map_err(|e| io_error("flush file", e))?;

    Ok(())
}

/// Loads a sidecar from a `MessagePack` file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or if deserialization fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<LineEntities>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        Error::new(ErrorKind::Io(format!(
            "failed to open file '{}': {e}",
            path.display()
        )))
    })?;

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();

    reader.read_to_end(&mut bytes).map_err(|e| {
        Error::new(ErrorKind::Io(format!(
            "failed to read file '{}': {e}",
            path.display()
        )))
    })?;

    from_bytes(&bytes)
}

//! CV data loading

use crate::error::{CvtexError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use toml::Value;

/// Read and parse a TOML data file into a table
pub fn load_data(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CvtexError::DataNotFound(path.to_path_buf()),
        _ => CvtexError::IoError(e),
    })?;

    let data = parse_data(&content, path)?;
    tracing::debug!("Loaded data from {}", path.display());
    Ok(data)
}

/// Parse TOML data; `path` is only used for error messages
pub fn parse_data(content: &str, path: &Path) -> Result<Value> {
    let table: toml::Table = toml::from_str(content).map_err(|e| CvtexError::DataInvalid {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(Value::Table(table))
}

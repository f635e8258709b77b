use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CvtexError {
    // Data errors
    #[error("DATA_NOT_FOUND: data file '{0}' not found")]
    DataNotFound(PathBuf),

    #[error("DATA_INVALID: failed to parse '{path}': {reason}")]
    DataInvalid { path: PathBuf, reason: String },

    // Config errors
    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParseError(String),

    #[error("CONFIG_INVALID_VALUE: {field}: {reason}")]
    ConfigInvalidValue { field: String, reason: String },

    // Template errors
    #[error("TEMPLATE_ERROR: {0}")]
    Template(#[from] crate::template::error::TemplateError),

    // Output errors
    #[error("OUTPUT_WRITE_FAILED: could not write '{path}': {reason}")]
    OutputWriteFailed { path: PathBuf, reason: String },

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CvtexError>;

// Core modules
pub mod config;
pub mod data;
pub mod document;
pub mod error;
pub mod format;
pub mod template;

// Re-export commonly used types
pub use error::{CvtexError, Result};

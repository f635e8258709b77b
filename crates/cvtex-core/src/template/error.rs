//! Template error types

use std::fmt;

/// Template rendering errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// Key not found in data context
    UndefinedKey {
        /// The key that was not found
        key: String,
        /// Line number where the error occurred
        line: usize,
    },

    /// Malformed template syntax
    MalformedSyntax {
        /// Error message
        message: String,
        /// Line number where the error occurred
        line: usize,
    },

    /// Array used in a placeholder without a filter
    ArrayInNonEachContext {
        /// The key that resolved to an array
        key: String,
    },

    /// Table used in placeholder (must use nested keys)
    TableInPlaceholder {
        /// The key that resolved to a table
        key: String,
    },

    /// Filter name not present in the registry
    UnknownFilter {
        /// The filter name as written in the template
        name: String,
        /// Line number where the error occurred
        line: usize,
    },

    /// Template name could not be found by the loader
    TemplateNotFound {
        /// Requested template name
        name: String,
    },

    /// Template name resolves outside the template directory
    TemplatePathEscape {
        /// Requested template name
        name: String,
    },

    /// Template file exists but could not be read
    TemplateReadFailed {
        /// Requested template name
        name: String,
        /// Underlying I/O error message
        reason: String,
    },

    /// Includes nested deeper than the engine allows
    IncludeDepthExceeded {
        /// Template whose include hit the limit
        name: String,
        /// Maximum allowed depth
        max_depth: usize,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UndefinedKey { key, line } => {
                write!(f, "Undefined key '{}' at line {}", key, line)
            }
            TemplateError::MalformedSyntax { message, line } => {
                write!(f, "Malformed syntax at line {}: {}", line, message)
            }
            TemplateError::ArrayInNonEachContext { key } => {
                write!(
                    f,
                    "Array '{}' used directly in a placeholder. Loop over it with 'each {} |item|' or pass it through a filter like '{} | pipes'",
                    key, key, key
                )
            }
            TemplateError::TableInPlaceholder { key } => {
                write!(
                    f,
                    "Table '{}' cannot be used directly in placeholder. Use nested keys like {}.field",
                    key, key
                )
            }
            TemplateError::UnknownFilter { name, line } => {
                write!(f, "Unknown filter '{}' at line {}", name, line)
            }
            TemplateError::TemplateNotFound { name } => {
                write!(f, "Template '{}' not found", name)
            }
            TemplateError::TemplatePathEscape { name } => {
                write!(
                    f,
                    "Template name '{}' resolves outside the template directory",
                    name
                )
            }
            TemplateError::TemplateReadFailed { name, reason } => {
                write!(f, "Failed to read template '{}': {}", name, reason)
            }
            TemplateError::IncludeDepthExceeded { name, max_depth } => {
                write!(
                    f,
                    "Include of '{}' exceeds the maximum nesting depth of {}. Check for templates including each other.",
                    name, max_depth
                )
            }
        }
    }
}

impl std::error::Error for TemplateError {}

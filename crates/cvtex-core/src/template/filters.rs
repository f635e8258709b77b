//! Named filter callbacks
//!
//! A placeholder such as `{{ skills | pipes }}` looks its filters up here.
//! The registry is owned by the engine; there is no process-wide table.

use std::collections::HashMap;
use std::fmt;

use crate::format::{self, FilterValue};
use crate::template::error::TemplateError;

/// Filter callback: `None` when the placeholder key is absent
pub type FilterFn = dyn Fn(Option<&FilterValue>) -> String + Send + Sync;

/// Filters available to templates, keyed by name
pub struct FilterRegistry {
    filters: HashMap<String, Box<FilterFn>>,
}

impl FilterRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            filters: HashMap::new(),
        }
    }

    /// Registry with the LaTeX formatters `bold`, `pipes` and `metrics`
    pub fn latex() -> Self {
        let mut registry = Self::new();
        registry.register("bold", bold_filter);
        registry.register("pipes", pipes_filter);
        registry.register("metrics", metrics_filter);
        registry
    }

    /// Register a filter, replacing any filter with the same name
    pub fn register<F>(&mut self, name: impl Into<String>, filter: F)
    where
        F: Fn(Option<&FilterValue>) -> String + Send + Sync + 'static,
    {
        self.filters.insert(name.into(), Box::new(filter));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.filters.contains_key(name)
    }

    /// Registered names in sorted order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.filters.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Apply the filter `name`; `line` is used for the error report
    pub fn apply(
        &self,
        name: &str,
        input: Option<&FilterValue>,
        line: usize,
    ) -> Result<String, TemplateError> {
        let filter = self
            .filters
            .get(name)
            .ok_or_else(|| TemplateError::UnknownFilter {
                name: name.to_string(),
                line,
            })?;
        Ok(filter(input))
    }
}

impl Default for FilterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FilterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterRegistry")
            .field("filters", &self.names())
            .finish()
    }
}

fn bold_filter(input: Option<&FilterValue>) -> String {
    match input {
        None => String::new(),
        Some(FilterValue::Scalar(text)) => format::bold(text),
        Some(FilterValue::List(items)) => items
            .iter()
            .map(|item| format::bold(item))
            .collect::<Vec<_>>()
            .join(", "),
    }
}

fn pipes_filter(input: Option<&FilterValue>) -> String {
    input.map(format::pipes).unwrap_or_default()
}

fn metrics_filter(input: Option<&FilterValue>) -> String {
    match input {
        None => String::new(),
        Some(value) if value.is_empty() => String::new(),
        Some(FilterValue::List(items)) => format::metrics(items),
        Some(FilterValue::Scalar(text)) => format::metrics(std::slice::from_ref(text)),
    }
}

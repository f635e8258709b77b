//! Filter input values

/// A value handed to a filter
///
/// Template data is either a single displayable field or an ordered list of
/// them. Non-string scalars (numbers, booleans, dates) arrive already
/// converted to their display form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    /// A single field, e.g. `"Rust, Go, C"` or `"42"`
    Scalar(String),
    /// An ordered list of fields
    List(Vec<String>),
}

impl FilterValue {
    /// True for an empty scalar or a list without items
    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::Scalar(text) => text.is_empty(),
            FilterValue::List(items) => items.is_empty(),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(text: &str) -> Self {
        FilterValue::Scalar(text.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(text: String) -> Self {
        FilterValue::Scalar(text)
    }
}

impl From<Vec<String>> for FilterValue {
    fn from(items: Vec<String>) -> Self {
        FilterValue::List(items)
    }
}

impl From<Vec<&str>> for FilterValue {
    fn from(items: Vec<&str>) -> Self {
        FilterValue::List(items.into_iter().map(str::to_string).collect())
    }
}

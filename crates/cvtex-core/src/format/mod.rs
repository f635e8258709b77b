//! Text formatting helpers for LaTeX output
//!
//! Pure string transformations invoked by the template engine as filters
//! (`bold`, `pipes`, `metrics`). None of them hold state or fail: empty or
//! absent input always yields an empty string.

mod latex;
mod value;

pub use latex::{bold, metrics, pipes, METRIC_SEPARATOR, PIPE_SEPARATOR};
pub use value::FilterValue;

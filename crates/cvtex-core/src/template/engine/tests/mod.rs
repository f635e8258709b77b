//! Tests for template engine
//!
//! Split by concern: tokenizer, rendering features, whitespace control and
//! error reporting.

use super::*;

// Test helper functions
mod helpers;


mod render_includes;
mod render_loops;

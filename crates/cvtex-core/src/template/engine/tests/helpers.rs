//! Shared test helpers for template engine tests

use crate::template::engine::TemplateContext;
use toml::{toml, Value};

/// Create a simple test context with basic scalar values
pub(super) fn simple_context() -> TemplateContext {
    let data = toml! {
        title = "Curriculum Vitae"
        count = 42
        price = 9.99
        enabled = true
        date = 2026-01-15
    };
    TemplateContext::new(Value::Table(data))
}

/// Create a CV-shaped context with nested tables and arrays
pub(super) fn cv_context() -> TemplateContext {
    let data = toml! {
        [profile]
        name = "Ada Lovelace"
        email = ""
        summary = "Led **3** teams; cut costs by 40%"
        skills = "Rust, Go/C, , LaTeX"

        [[jobs]]
        company = "Acme"
        title = "Engineer"
        metrics = ["50%", "**2x** throughput"]
        tags = ["CI/CD", "Kubernetes"]

        [[jobs]]
        company = "Globex"
        title = "Lead"
        metrics = []
        tags = []
    };
    TemplateContext::new(Value::Table(data))
}

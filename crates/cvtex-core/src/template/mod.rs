//! Template module - text substitution engine for LaTeX documents
//!
//! Renders template files against TOML data, passing values through named
//! filters on the way.
//!
//! ## Philosophy
//!
//! - **Pure text substitution**: no LaTeX evaluation, output is not escaped
//! - **Filters escape**: `bold`, `pipes` and `metrics` produce LaTeX-safe text
//! - **Template author responsibility**: the template must produce valid LaTeX
//! - **TOML data mapping**: all TOML-representable data can be used
//!
//! ## Syntax (`braces` preset; the `latex` preset swaps the delimiters)
//!
//! - Placeholders: `{{key}}`, `{{ nested.key }}`
//! - Filters: `{{ skills | pipes }}`, `{{ summary | bold }}`
//! - List iteration: `{{each items |item|}} ... {{/each}}` with `loop.index`,
//!   `loop.first`, `loop.last`
//! - Conditionals: `{{if key}} ... {{else}} ... {{/if}}`, `{{if not key}}`
//! - Includes: `{{include "sections/skills.tex"}}`
//! - Literal text: `{{raw}} ... {{/raw}}`
//! - Comments: `{{# ... #}}`

pub mod engine;
pub mod error;
pub mod filters;
pub mod loader;
pub mod syntax;

pub use engine::{render, Template, TemplateContext, TemplateEngine};
pub use error::TemplateError;
pub use filters::FilterRegistry;
pub use loader::TemplateLoader;
pub use syntax::{Delimiters, Syntax};

//! Tag delimiters and whitespace control
//!
//! LaTeX sources are full of `{` and `}`, so documents default to the
//! [`Syntax::latex`] preset with XML-like markers that never collide with
//! TeX grouping:
//!
//! ```text
//! <VAR>profile.name</VAR>
//! <BLOCK>each jobs |job|</BLOCK> ... <BLOCK>/each</BLOCK>
//! <# comment #>
//! ```

/// An opening/closing delimiter pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiters {
    pub open: String,
    pub close: String,
}

impl Delimiters {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }
}

/// Template syntax configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syntax {
    /// Placeholder delimiters
    pub variable: Delimiters,
    /// Block tag delimiters (`each`, `if`, `include`, `raw`, ...)
    pub block: Delimiters,
    /// Comment delimiters
    pub comment: Delimiters,
    /// Drop the first newline after a block or comment tag
    pub trim_blocks: bool,
    /// Drop spaces and tabs between line start and a block or comment tag
    pub lstrip_blocks: bool,
    /// Missing keys in placeholders and `each` are errors instead of empty
    pub strict_undefined: bool,
}

impl Syntax {
    /// `<VAR>…</VAR>`, `<BLOCK>…</BLOCK>`, `<#…#>` with whitespace control on
    pub fn latex() -> Self {
        Self {
            variable: Delimiters::new("<VAR>", "</VAR>"),
            block: Delimiters::new("<BLOCK>", "</BLOCK>"),
            comment: Delimiters::new("<#", "#>"),
            trim_blocks: true,
            lstrip_blocks: true,
            strict_undefined: false,
        }
    }

    /// `{{…}}` for placeholders and blocks, `{{#…#}}` for comments
    pub fn braces() -> Self {
        Self {
            variable: Delimiters::new("{{", "}}"),
            block: Delimiters::new("{{", "}}"),
            comment: Delimiters::new("{{#", "#}}"),
            trim_blocks: false,
            lstrip_blocks: false,
            strict_undefined: false,
        }
    }

    pub fn with_trim_blocks(mut self, trim_blocks: bool) -> Self {
        self.trim_blocks = trim_blocks;
        self
    }

    pub fn with_lstrip_blocks(mut self, lstrip_blocks: bool) -> Self {
        self.lstrip_blocks = lstrip_blocks;
        self
    }

    pub fn with_strict_undefined(mut self, strict_undefined: bool) -> Self {
        self.strict_undefined = strict_undefined;
        self
    }

    /// Placeholders and blocks share delimiters and are told apart by content
    pub(crate) fn shared_tags(&self) -> bool {
        self.variable == self.block
    }
}

impl Default for Syntax {
    fn default() -> Self {
        Self::braces()
    }
}

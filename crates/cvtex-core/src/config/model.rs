use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::consts;
use crate::template::Syntax;

/// cvtex.toml schema
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub syntax: SyntaxConfig,
}

/// Input and output locations, relative to the project root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_data")]
    pub data: PathBuf,
    #[serde(default = "default_templates")]
    pub templates: PathBuf,
    /// Entry template name inside `templates`
    #[serde(default = "default_template")]
    pub template: String,
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data: default_data(),
            templates: default_templates(),
            template: default_template(),
            output: default_output(),
        }
    }
}

fn default_data() -> PathBuf {
    PathBuf::from(consts::DEFAULT_DATA)
}

fn default_templates() -> PathBuf {
    PathBuf::from(consts::DEFAULT_TEMPLATES)
}

fn default_template() -> String {
    consts::DEFAULT_TEMPLATE.to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from(consts::DEFAULT_OUTPUT)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyntaxConfig {
    #[serde(default)]
    pub preset: SyntaxPreset,
    /// Overrides the preset's trim_blocks
    #[serde(default)]
    pub trim_blocks: Option<bool>,
    /// Overrides the preset's lstrip_blocks
    #[serde(default)]
    pub lstrip_blocks: Option<bool>,
    /// Fail on missing keys instead of rendering them empty
    #[serde(default)]
    pub strict_undefined: bool,
}

impl SyntaxConfig {
    /// Build the engine syntax from the preset plus overrides
    pub fn to_syntax(&self) -> Syntax {
        let syntax = match self.preset {
            SyntaxPreset::Latex => Syntax::latex(),
            SyntaxPreset::Braces => Syntax::braces(),
        };
        let trim_blocks = self.trim_blocks.unwrap_or(syntax.trim_blocks);
        let lstrip_blocks = self.lstrip_blocks.unwrap_or(syntax.lstrip_blocks);
        syntax
            .with_trim_blocks(trim_blocks)
            .with_lstrip_blocks(lstrip_blocks)
            .with_strict_undefined(self.strict_undefined)
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SyntaxPreset {
    /// `<VAR>…</VAR>`, `<BLOCK>…</BLOCK>`, `<#…#>`
    #[default]
    Latex,
    /// `{{…}}`, `{{#…#}}`
    Braces,
}

//! Project configuration (`cvtex.toml`)
//!
//! The file is optional. Without it every setting takes its default, which
//! renders `templates/base.tex.j2` with `cv.toml` into `output/cv.tex`.

pub mod consts;
mod model;

pub use model::{Config, PathsConfig, SyntaxConfig, SyntaxPreset};

use crate::error::{CvtexError, Result};
use crate::template::Syntax;
use std::fs;
use std::path::{Path, PathBuf};

/// Fully resolved settings for one render
#[derive(Debug, Clone)]
pub struct RenderSettings {
    pub data: PathBuf,
    pub templates: PathBuf,
    pub template: String,
    pub output: PathBuf,
    pub syntax: Syntax,
}

impl Config {
    /// Parse a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| CvtexError::ConfigParseError(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `cvtex.toml` from `root`, or defaults if it does not exist
    pub fn load_or_default(root: &Path) -> Result<Self> {
        let path = root.join(consts::CONFIG_FILE);
        if path.is_file() {
            tracing::debug!("Loading config from {}", path.display());
            Self::from_file(&path)
        } else {
            tracing::debug!("No {} in {}, using defaults", consts::CONFIG_FILE, root.display());
            Ok(Self::default())
        }
    }

    /// Reject empty paths and template names
    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("paths.data", self.paths.data.as_os_str().is_empty()),
            ("paths.templates", self.paths.templates.as_os_str().is_empty()),
            ("paths.template", self.paths.template.trim().is_empty()),
            ("paths.output", self.paths.output.as_os_str().is_empty()),
        ];

        for (field, empty) in checks {
            if empty {
                return Err(CvtexError::ConfigInvalidValue {
                    field: field.to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Resolve relative paths against `root`
    pub fn resolve(&self, root: &Path) -> RenderSettings {
        RenderSettings {
            data: root.join(&self.paths.data),
            templates: root.join(&self.paths.templates),
            template: self.paths.template.clone(),
            output: root.join(&self.paths.output),
            syntax: self.syntax.to_syntax(),
        }
    }
}

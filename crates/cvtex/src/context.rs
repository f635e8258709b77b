//! Global context for CLI commands

use crate::cli::PathArgs;
use anyhow::{Result, bail};
use cvtex_core::config::{Config, RenderSettings};
use std::env;
use std::path::{Path, PathBuf};

/// Project root plus its configuration
pub struct Context {
    pub root: PathBuf,
    pub config: Config,
}

impl Context {
    /// Load the project at `dir`, or the current directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The project root is not a directory
    /// - `cvtex.toml` exists but cannot be read or parsed
    pub fn new(dir: Option<PathBuf>) -> Result<Self> {
        let root = match dir {
            Some(dir) => dir,
            None => env::current_dir()?,
        };
        if !root.is_dir() {
            bail!("Project directory '{}' does not exist", root.display());
        }

        let config = Config::load_or_default(&root)?;
        Ok(Self { root, config })
    }

    /// Apply command-line overrides and resolve paths against the root
    pub fn settings(&self, paths: &PathArgs, output: Option<&Path>) -> Result<RenderSettings> {
        let mut config = self.config.clone();

        if let Some(data) = &paths.data {
            config.paths.data = data.clone();
        }
        if let Some(templates) = &paths.templates {
            config.paths.templates = templates.clone();
        }
        if let Some(template) = &paths.template {
            config.paths.template = template.clone();
        }
        if let Some(output) = output {
            config.paths.output = output.to_path_buf();
        }

        config.validate()?;
        Ok(config.resolve(&self.root))
    }

    /// Path for display, relative to the root when possible
    pub fn display_path<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}

//! Template loading from a single directory

use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use crate::template::error::TemplateError;

/// Resolves template names relative to a template directory
///
/// Names are relative paths like `base.tex.j2` or `sections/skills.tex.j2`.
/// Absolute names and `..` components are rejected so that an `include`
/// can never read outside the directory.
#[derive(Debug, Clone)]
pub struct TemplateLoader {
    root: PathBuf,
}

impl TemplateLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a template name to a path inside the template directory
    pub fn resolve(&self, name: &str) -> Result<PathBuf, TemplateError> {
        let relative = Path::new(name);
        let mut normal_count = 0;

        for component in relative.components() {
            match component {
                Component::Normal(_) => normal_count += 1,
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(TemplateError::TemplatePathEscape {
                        name: name.to_string(),
                    });
                }
            }
        }

        if normal_count == 0 {
            return Err(TemplateError::TemplateNotFound {
                name: name.to_string(),
            });
        }

        Ok(self.root.join(relative))
    }

    /// Read a template's source text
    pub fn load(&self, name: &str) -> Result<String, TemplateError> {
        let path = self.resolve(name)?;
        tracing::debug!("Loading template '{}' from {}", name, path.display());

        fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => TemplateError::TemplateNotFound {
                name: name.to_string(),
            },
            _ => TemplateError::TemplateReadFailed {
                name: name.to_string(),
                reason: e.to_string(),
            },
        })
    }
}

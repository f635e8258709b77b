//! Render the CV document and write it to disk

use crate::config::RenderSettings;
use crate::data::load_data;
use crate::error::{CvtexError, Result};
use crate::template::{TemplateContext, TemplateEngine, TemplateLoader};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Result of a successful render
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    /// Entry template name
    pub template: String,
    /// Rendered LaTeX source
    pub contents: String,
}

/// Build an engine for `settings` with the LaTeX filters and a loader over
/// the template directory
pub fn engine_for(settings: &RenderSettings) -> TemplateEngine {
    TemplateEngine::with_syntax(settings.syntax.clone())
        .with_loader(TemplateLoader::new(&settings.templates))
}

/// Load the data and render the entry template in memory
pub fn render_document(settings: &RenderSettings) -> Result<RenderedDocument> {
    let data = load_data(&settings.data)?;
    let context = TemplateContext::new(data);
    let contents = engine_for(settings).render_named(&settings.template, &context)?;

    Ok(RenderedDocument {
        template: settings.template.clone(),
        contents,
    })
}

/// Render and write the document to `settings.output`
///
/// Returns the path written.
pub fn generate_document(settings: &RenderSettings) -> Result<PathBuf> {
    let document = render_document(settings)?;
    write_output(&settings.output, &document.contents)?;
    Ok(settings.output.clone())
}

/// Replace `path` with `contents`
///
/// The content goes to a temporary file next to `path` which is then renamed
/// over it, so readers never see a partial document.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let write_failed = |reason: String| CvtexError::OutputWriteFailed {
        path: path.to_path_buf(),
        reason,
    };

    fs::create_dir_all(parent).map_err(|e| write_failed(e.to_string()))?;

    let mut file = NamedTempFile::new_in(parent).map_err(|e| write_failed(e.to_string()))?;
    file.write_all(contents.as_bytes())
        .map_err(|e| write_failed(e.to_string()))?;
    file.as_file()
        .sync_all()
        .map_err(|e| write_failed(e.to_string()))?;
    file.persist(path)
        .map_err(|e| write_failed(e.error.to_string()))?;

    tracing::debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::template::TemplateError;
    use cvtex_testkit::{temp_dir_in_workspace, write_sample_project};

    #[test]
    fn test_render_sample_project() {
        let temp = temp_dir_in_workspace();
        write_sample_project(temp.path());

        let settings = Config::default().resolve(temp.path());
        let document = render_document(&settings).unwrap();

        assert_eq!(document.template, "base.tex.j2");
        assert!(document.contents.contains("\\name{Ada Lovelace}"));
        assert!(document.contents.contains("\\textbf{50\\%}"));
        assert!(document.contents.contains("CI/\\allowbreak{}CD"));
        assert!(!document.contents.contains("<VAR>"));
    }

    #[test]
    fn test_generate_document_creates_output_dir() {
        let temp = temp_dir_in_workspace();
        write_sample_project(temp.path());

        let settings = Config::default().resolve(temp.path());
        let written = generate_document(&settings).unwrap();

        assert_eq!(written, temp.path().join("output/cv.tex"));
        let contents = fs::read_to_string(&written).unwrap();
        assert!(contents.starts_with("\\documentclass"));
    }

    #[test]
    fn test_missing_template_reports_name() {
        let temp = temp_dir_in_workspace();
        write_sample_project(temp.path());

        let mut config = Config::default();
        config.paths.template = "missing.tex.j2".to_string();
        let settings = config.resolve(temp.path());

        match render_document(&settings) {
            Err(CvtexError::Template(TemplateError::TemplateNotFound { name })) => {
                assert_eq!(name, "missing.tex.j2");
            }
            other => panic!("Expected TemplateNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_data_is_fatal() {
        let temp = temp_dir_in_workspace();
        write_sample_project(temp.path());
        fs::remove_file(temp.path().join("cv.toml")).unwrap();

        let settings = Config::default().resolve(temp.path());
        assert!(matches!(
            render_document(&settings),
            Err(CvtexError::DataNotFound(_))
        ));
        assert!(!temp.path().join("output/cv.tex").exists());
    }

    #[test]
    fn test_write_output_overwrites() {
        let temp = temp_dir_in_workspace();
        let path = temp.path().join("nested/dir/cv.tex");

        write_output(&path, "first version, longer").unwrap();
        write_output(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        let leftovers: Vec<_> = fs::read_dir(path.parent().unwrap())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path() != path)
            .collect();
        assert!(leftovers.is_empty(), "temporary files left behind");
    }
}

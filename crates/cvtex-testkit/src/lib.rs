//! Test utilities for cvtex
//!
//! This crate provides shared testing utilities used across the cvtex workspace.

use std::path::Path;
use tempfile::TempDir;

/// CV data used by [`write_sample_project`]
pub const SAMPLE_DATA: &str = r#"[profile]
name = "Ada Lovelace"
email = "ada@example.com"
summary = "Wrote the **first** program; cut error rates by 90%"
skills = "Rust, C/C++, , LaTeX"

[[jobs]]
company = "Analytical Engines"
title = "Engineer"
metrics = ["50%", "**2x** throughput"]
tags = ["CI/CD", "Kubernetes"]

[[jobs]]
company = "Difference Ltd"
title = "Lead"
metrics = []
tags = []
"#;

/// Entry template used by [`write_sample_project`] (latex syntax)
pub const SAMPLE_BASE_TEMPLATE: &str = r#"\documentclass[11pt]{article}
\usepackage{xcolor}
\definecolor{divider}{gray}{0.6}
\newcommand{\name}[1]{{\Large\bfseries #1}}
<# header #>
\begin{document}
\name{<VAR>profile.name</VAR>}
<BLOCK>if profile.email</BLOCK>
\texttt{<VAR>profile.email</VAR>}
<BLOCK>/if</BLOCK>

<VAR>profile.summary | bold</VAR>

\section*{Skills}
<VAR>profile.skills | pipes</VAR>

\section*{Experience}
<BLOCK>each jobs |job|</BLOCK>
<BLOCK>include "sections/job.tex.j2"</BLOCK>
<BLOCK>/each</BLOCK>
\end{document}
"#;

/// Included once per job by [`SAMPLE_BASE_TEMPLATE`]
pub const SAMPLE_JOB_TEMPLATE: &str = r#"\subsection*{<VAR>job.title</VAR> at <VAR>job.company</VAR>}
<VAR>job.metrics | metrics</VAR>

<VAR>job.tags | pipes</VAR>
"#;

/// Creates a temporary directory within `.tmp/` at the project root
///
/// This ensures all test temporary files are centralized in a single location
/// that is gitignored and easy to clean up manually if needed.
///
/// # Panics
///
/// Panics if the current directory cannot be determined or `.tmp/` cannot be
/// created.
///
/// # Examples
///
/// ```rust
/// use cvtex_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// let file_path = temp.path().join("cv.toml");
/// std::fs::write(&file_path, "[profile]\nname = \"Ada\"\n").unwrap();
/// // Cleanup happens automatically when temp is dropped
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    let workspace_root = std::env::current_dir().expect("Failed to get current directory");

    let tmp_base = workspace_root.join(".tmp");

    // Ensure .tmp/ exists
    std::fs::create_dir_all(&tmp_base).expect("Failed to create .tmp directory");

    TempDir::new_in(&tmp_base).expect("Failed to create temporary directory in .tmp/")
}

/// Alternative with Result for non-test code
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let workspace_root = std::env::current_dir()?;
    let tmp_base = workspace_root.join(".tmp");
    std::fs::create_dir_all(&tmp_base)?;
    TempDir::new_in(&tmp_base)
}

/// Write a renderable CV project into `root`
///
/// Layout:
///
/// ```text
/// root/
/// ├── cv.toml
/// └── templates/
///     ├── base.tex.j2
///     └── sections/job.tex.j2
/// ```
///
/// No `cvtex.toml` is written, so the defaults apply.
///
/// # Panics
///
/// Panics if any file cannot be written.
pub fn write_sample_project(root: &Path) {
    let sections = root.join("templates").join("sections");
    std::fs::create_dir_all(&sections).expect("Failed to create templates/sections");

    std::fs::write(root.join("cv.toml"), SAMPLE_DATA).expect("Failed to write cv.toml");
    std::fs::write(
        root.join("templates").join("base.tex.j2"),
        SAMPLE_BASE_TEMPLATE,
    )
    .expect("Failed to write base.tex.j2");
    std::fs::write(sections.join("job.tex.j2"), SAMPLE_JOB_TEMPLATE)
        .expect("Failed to write job.tex.j2");
}

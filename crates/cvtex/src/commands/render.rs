//! Render command - write the CV as LaTeX

use crate::cli::PathArgs;
use crate::context::Context;
use anyhow::Result;
use colored::Colorize;
use cvtex_core::document::{generate_document, render_document};
use std::io::{self, Write};
use std::path::PathBuf;

/// Render the entry template and write it to the output file
///
/// # Arguments
///
/// * `dir` - Project root override
/// * `paths` - Input overrides
/// * `output` - Output file override
/// * `stdout` - Print the document instead of writing it
/// * `verbose` - Enable verbose output if true
pub fn run(
    dir: Option<PathBuf>,
    paths: PathArgs,
    output: Option<PathBuf>,
    stdout: bool,
    verbose: bool,
) -> Result<()> {
    let ctx = Context::new(dir)?;
    let settings = ctx.settings(&paths, output.as_deref())?;

    if verbose {
        eprintln!(
            "{} Rendering '{}' with {}",
            "→".cyan(),
            settings.template,
            ctx.display_path(&settings.data).display()
        );
    }

    if stdout {
        let document = render_document(&settings)?;
        let mut out = io::stdout().lock();
        out.write_all(document.contents.as_bytes())?;
        out.flush()?;
        return Ok(());
    }

    let written = generate_document(&settings)?;
    println!(
        "{} Rendered: {}",
        "✓".green().bold(),
        ctx.display_path(&written).display()
    );

    Ok(())
}

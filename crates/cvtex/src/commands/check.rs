//! Check command - render in memory without writing

use crate::cli::PathArgs;
use crate::context::Context;
use anyhow::Result;
use colored::Colorize;
use cvtex_core::document::render_document;
use std::path::PathBuf;

pub fn run(dir: Option<PathBuf>, paths: PathArgs, verbose: bool) -> Result<()> {
    let ctx = Context::new(dir)?;
    let settings = ctx.settings(&paths, None)?;

    if verbose {
        eprintln!(
            "{} Checking '{}' in {}",
            "→".cyan(),
            settings.template,
            ctx.display_path(&settings.templates).display()
        );
    }

    let document = render_document(&settings)?;
    println!(
        "{} {} renders cleanly ({} bytes)",
        "✓".green().bold(),
        document.template,
        document.contents.len()
    );

    Ok(())
}

//! CLI command structure using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cvtex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root (defaults to the current directory)
    #[arg(short = 'C', long = "dir", global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the CV to a LaTeX file
    Render {
        #[command(flatten)]
        paths: PathArgs,

        /// Output file (default: output/cv.tex)
        #[arg(short, long, value_name = "FILE", conflicts_with = "stdout")]
        output: Option<PathBuf>,

        /// Print the document instead of writing it
        #[arg(long)]
        stdout: bool,
    },

    /// Render in memory and report errors without writing anything
    Check {
        #[command(flatten)]
        paths: PathArgs,
    },

    /// Apply a single filter to the given values
    Filter {
        /// Filter name (bold, pipes, metrics)
        name: String,

        /// No value: absent input. One value: a string. Several: a list
        values: Vec<String>,
    },
}

/// Input overrides shared by `render` and `check`
///
/// Relative paths resolve against the project root.
#[derive(Args, Debug, Clone, Default)]
pub struct PathArgs {
    /// CV data file (default: cv.toml)
    #[arg(short, long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Template directory (default: templates)
    #[arg(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,

    /// Entry template inside the template directory (default: base.tex.j2)
    #[arg(short, long, value_name = "NAME")]
    pub template: Option<String>,
}

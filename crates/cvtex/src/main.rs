mod cli;
mod commands;
mod context;
mod logging;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Render {
            paths,
            output,
            stdout,
        } => commands::render::run(cli.dir, paths, output, stdout, cli.verbose),
        Commands::Check { paths } => commands::check::run(cli.dir, paths, cli.verbose),
        Commands::Filter { name, values } => commands::filter::run(&name, values),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

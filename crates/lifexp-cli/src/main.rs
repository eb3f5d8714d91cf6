//! lifexp CLI - Eurostat life-expectancy cleaning pipeline.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Clean {
            file,
            region,
            data_dir,
        } => commands::clean::run(file, region, data_dir, cli.verbose),

        Commands::Regions { countries_only } => commands::regions::run(countries_only),

        Commands::Sample { file, rows, output } => {
            commands::sample::run(file, rows, output, cli.verbose)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// lifexp: Eurostat life-expectancy cleaning pipeline
#[derive(Parser)]
#[command(name = "lifexp")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clean a raw data file and write the per-region artifact
    Clean {
        /// Raw data file (TSV or JSON), resolved against the data directory
        #[arg(value_name = "FILE", default_value = "eu_life_expectancy_raw.tsv")]
        file: PathBuf,

        /// Region to filter the life expectancy data on
        #[arg(short, long, default_value = "PT")]
        region: String,

        /// Directory holding raw input and cleaned output artifacts
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
    },

    /// List the region catalog
    Regions {
        /// Show only filterable countries, skipping aggregate codes
        #[arg(long)]
        countries_only: bool,
    },

    /// Sample rows from a raw wide TSV into a smaller fixture file
    Sample {
        /// Raw TSV file to sample from
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Number of data rows to keep
        #[arg(short = 'n', long, default_value = "1000")]
        rows: usize,

        /// Output path (default: <input>_sample.tsv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

//! Clean command - run the full pipeline for one region.

use std::path::PathBuf;

use colored::Colorize;
use lifexp::{Pipeline, Region, Source};

pub fn run(
    file: PathBuf,
    region: String,
    data_dir: PathBuf,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let region = Region::from_code(&region)?;

    println!(
        "{} {} for region {}",
        "Cleaning".cyan().bold(),
        file.display().to_string().white(),
        region.code().white()
    );

    let pipeline = Pipeline::new(&data_dir);
    let cleaned = pipeline.run(Source::Path(file), region)?;

    if verbose {
        println!();
        println!("{}", "First rows:".yellow().bold());
        for record in cleaned.iter().take(5) {
            println!(
                "  {} {} {} {} {} {:.1}",
                record.unit, record.sex, record.age, record.region, record.year, record.value
            );
        }
    }

    println!(
        "{} {} rows, artifact written under {}",
        "Done:".green().bold(),
        cleaned.len(),
        data_dir.display()
    );

    Ok(())
}

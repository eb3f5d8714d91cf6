//! Sample command - cut a raw wide TSV down to a fixture-sized file.

use std::fs;
use std::path::PathBuf;

use colored::Colorize;

pub fn run(
    file: PathBuf,
    rows: usize,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = fs::read_to_string(&file)
        .map_err(|e| format!("Failed to read '{}': {}", file.display(), e))?;

    let mut lines = content.lines();
    let header = lines
        .next()
        .ok_or_else(|| format!("'{}' is empty", file.display()))?;
    let mut data_rows: Vec<&str> = lines.filter(|l| !l.trim().is_empty()).collect();

    if data_rows.len() > rows {
        fastrand::shuffle(&mut data_rows);
        data_rows.truncate(rows);
    }

    let output = output.unwrap_or_else(|| {
        let stem = file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "raw".to_string());
        file.with_file_name(format!("{stem}_sample.tsv"))
    });

    let mut out = String::with_capacity(content.len());
    out.push_str(header);
    out.push('\n');
    for row in &data_rows {
        out.push_str(row);
        out.push('\n');
    }
    fs::write(&output, out)
        .map_err(|e| format!("Failed to write '{}': {}", output.display(), e))?;

    if verbose {
        println!("Kept {} of the available data rows", data_rows.len());
    }
    println!(
        "{} {} rows to {}",
        "Sampled".green().bold(),
        data_rows.len(),
        output.display()
    );

    Ok(())
}

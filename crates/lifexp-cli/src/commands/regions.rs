//! Regions command - list the catalog.

use colored::Colorize;
use lifexp::Region;

pub fn run(countries_only: bool) -> Result<(), Box<dyn std::error::Error>> {
    for region in Region::ALL {
        if region.is_country() {
            println!("{}", region.code());
        } else if !countries_only {
            println!("{}  {}", region.code(), "(aggregate)".dimmed());
        }
    }
    Ok(())
}

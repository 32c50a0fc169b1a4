//! # BRICKFORGE Builder
//!
//! Headless analyzer: reads a run configuration, a BrickLink inventory,
//! and the catalog/price snapshots, then writes the build report.
//!
//! ```bash
//! # Run with the default config path (brickforge.toml)
//! ./builder
//!
//! # Run with an explicit config
//! ./builder runs/store-august.toml
//! ```
//!
//! No network access: snapshots must already be on disk.

use std::path::Path;
use std::process::ExitCode;

use brickforge::config::BuilderConfig;
use brickforge::error::BuilderError;
use brickforge::{inventory_xml, report_file, snapshot};
use brickforge_engine::{analyze, BuildRecord};

/// Listing length per group on the console.
const MAX_LISTED: usize = 20;

fn main() -> ExitCode {
    println!("═══════════════════════════════════════════════════════════════════");
    println!("                    BRICKFORGE BUILDER v0.1.0");
    println!("                 MINIFIGURE BUILD ANALYSIS");
    println!("═══════════════════════════════════════════════════════════════════");

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "brickforge.toml".to_string());

    match run(Path::new(&config_path)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Loads everything, runs the engine, prints and writes the report.
fn run(config_path: &Path) -> Result<(), BuilderError> {
    let config = BuilderConfig::from_toml_file(config_path)?;

    let inventory = inventory_xml::load_inventory(&config.inventory)?;
    println!(
        "Inventory: {} unique parts, {} total pieces",
        inventory.unique_parts(),
        inventory.total_units()
    );

    let recipes = snapshot::load_recipes(&config.catalog)?;
    println!("Catalog:   {} minifigure recipes", recipes.len());

    let prices = match &config.prices {
        Some(path) => snapshot::load_price_book(path)?,
        None => brickforge_catalog::PriceBook::new(),
    };
    println!("Prices:    {} guides\n", prices.len());

    let report = analyze(&inventory, &recipes, &prices);

    println!(
        "Builds: {} complete, {} partial",
        report.summary.complete_matches, report.summary.incomplete_matches
    );
    print_group("COMPLETE BUILDS", &report.complete);
    if !config.complete_only {
        print_group("PARTIAL BUILDS", &report.incomplete);
    }

    report_file::write_report(&report, &config.report)?;
    println!("\nResults saved to {}", config.report.display());
    Ok(())
}

/// Prints one group of builds, truncated to the listing length.
fn print_group(title: &str, records: &[BuildRecord]) {
    if records.is_empty() {
        return;
    }
    println!("\n{title} ({}):", records.len());
    for record in records.iter().take(MAX_LISTED) {
        let year = record
            .year_released
            .map_or_else(String::new, |y| format!(" ({y})"));
        if record.can_build {
            let copies = if record.buildable_count > 1 {
                format!(" x{}", record.buildable_count)
            } else {
                String::new()
            };
            println!(
                "  {} - {}{year}{copies}  [{} parts, profit {:+.2}]",
                record.minifig_id, record.minifig_name, record.total_parts, record.profit
            );
        } else {
            println!(
                "  {} - {}{year}  [{}/{} parts, {:.0}% match]",
                record.minifig_id,
                record.minifig_name,
                record.matched_parts,
                record.total_parts,
                record.match_percentage
            );
        }
    }
    if records.len() > MAX_LISTED {
        println!("  ... and {} more", records.len() - MAX_LISTED);
    }
}

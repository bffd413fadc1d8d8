//! Check that every card's image path exists. Exits 1 when issues are found.

use learniq_tools::models::{load_json, Card};
use learniq_tools::{logging, validator, Config};
use std::process;

fn run(config: &Config) -> learniq_tools::Result<bool> {
    let cards_path = config.cards_path();
    if !cards_path.exists() {
        eprintln!("Error: {} not found", cards_path.display());
        return Ok(false);
    }

    let cards: Vec<Card> = load_json(&cards_path)?;
    println!("Validating {} cards...", cards.len());
    println!("{}", "=".repeat(60));

    let files = validator::scan_image_files(&config.assets_dir, &config.asset_prefix())?;
    let report = validator::validate_cards(&cards, &files);
    validator::print_report(&report);

    Ok(report.is_success())
}

fn main() {
    logging::init();

    let success = match Config::from_env().and_then(|config| run(&config)) {
        Ok(success) => success,
        Err(e) => {
            eprintln!("Error: {}", e);
            false
        }
    };

    process::exit(if success { 0 } else { 1 });
}

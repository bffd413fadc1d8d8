//! Generate `cards.json` from the processed asset tree.

use learniq_tools::{generator, logging, Config};
use std::process;

fn main() -> learniq_tools::Result<()> {
    logging::init();
    let config = Config::from_env()?;

    if !config.assets_dir.is_dir() {
        eprintln!("Error: assets directory not found: {}", config.assets_dir.display());
        process::exit(1);
    }

    println!("Generating cards.json...");
    let (cards, output) = generator::write_cards(&config)?;

    println!("✅ Generated {} cards", cards.len());
    println!("Saved to: {}", output.display());
    println!("\n⚠️  Note: Articles (der/die/das) are estimates. Please verify!");

    Ok(())
}

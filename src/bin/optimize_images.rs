//! Downscale and recompress every image in the asset tree.

use learniq_tools::{logging, optimizer, Config};
use std::process;

fn main() -> learniq_tools::Result<()> {
    logging::init();
    let config = Config::from_env()?;
    let settings = config.images;

    if !config.assets_dir.is_dir() {
        eprintln!(
            "Error: Directory '{}' not found",
            config.assets_dir.display()
        );
        eprintln!("Please run this tool from the project root");
        process::exit(1);
    }

    println!("LearnIQ Image Optimization");
    println!("{}", "=".repeat(60));
    println!("Target: Reduce images to ~{}KB each", settings.target_size_kb);
    println!(
        "Max dimensions: {}x{}px",
        settings.max_width, settings.max_height
    );
    println!("JPEG quality: {}%", settings.quality);
    println!("{}", "=".repeat(60));
    println!();

    let summary = optimizer::optimize_directory(&config.assets_dir, &settings)?;
    optimizer::print_summary(&summary, &settings);

    Ok(())
}

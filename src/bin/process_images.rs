//! Copy downloaded topic images into `assets/images` under canonical names.

use learniq_tools::{importer, logging, Config, PipelineError};
use std::process;

fn main() -> learniq_tools::Result<()> {
    logging::init();
    let config = Config::from_env()?;

    println!("LearnIQ Image Processor v2");
    println!("{}", "=".repeat(50));

    let results = match importer::import_all(&config) {
        Ok(results) => results,
        Err(PipelineError::MissingDirectory(path)) => {
            eprintln!("Error: Download path not found: {}", path.display());
            process::exit(1);
        }
        Err(e) => return Err(e),
    };

    let processed: usize = results.iter().map(|r| r.processed).sum();
    let skipped: usize = results.iter().map(|r| r.skipped).sum();

    println!("\n{}", "=".repeat(50));
    println!(
        "✅ All images processed successfully! ({} copied, {} skipped)",
        processed, skipped
    );
    println!("Images saved to: {}", config.assets_dir.display());

    Ok(())
}

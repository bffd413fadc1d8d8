//! Replace deprecated `.withOpacity(x)` calls with `.withValues(alpha: x)`.

use learniq_tools::{formatter, logging, Config};

fn main() -> learniq_tools::Result<()> {
    logging::init();
    let config = Config::from_env()?;

    let modified = formatter::fix_all_dart_files(&config.source_dir)?;
    for path in &modified {
        let shown = path.strip_prefix(&config.root).unwrap_or(path);
        println!("✓ Fixed: {}", shown.display());
    }

    println!("\n{} files updated", modified.len());

    Ok(())
}

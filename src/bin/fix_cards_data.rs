//! Reconcile topic card counts and fill missing Ukrainian translations.

use learniq_tools::{fixer, logging, models::backup_path, Config};

fn main() -> learniq_tools::Result<()> {
    logging::init();
    let config = Config::from_env()?;

    println!("LearnIQ Data Fixer");
    println!("{}", "=".repeat(50));

    fixer::fix_card_counts(&config)?;
    let translations_added = fixer::add_ukrainian_translations(&config)?;

    println!("\n{}", "=".repeat(50));
    println!("✅ COMPLETED");
    println!("  Card counts updated in topics.json");
    println!("  {} Ukrainian translations added", translations_added);
    println!("  Backups created:");
    println!("    - {}", backup_path(&config.topics_path()).display());
    println!("    - {}", backup_path(&config.cards_path()).display());
    println!("\n⚠️  NOTE: Auto-translations are basic.");
    println!("   Review Ukrainian translations for accuracy.");

    Ok(())
}

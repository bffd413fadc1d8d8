use crate::config::Config;
use crate::constants::{lookup, RU_TO_UK_ENDINGS, RU_TO_UK_TITLES};
use crate::error::Result;
use crate::models::{backup_file, load_json, save_json, Card, Topic};
use std::collections::{BTreeMap, HashSet};

/// Declared vs. actual card count for one topic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountChange {
    pub topic_id: String,
    pub declared: usize,
    pub actual: usize,
}

impl CountChange {
    pub fn is_mismatch(&self) -> bool {
        self.declared != self.actual
    }
}

// ============================================================================
// Card Counts
// ============================================================================

/// Number of cards per `topic_id`
pub fn count_cards_by_topic(cards: &[Card]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for card in cards {
        *counts.entry(card.topic_id.clone()).or_insert(0) += 1;
    }
    counts
}

/// Overwrite each topic's `card_count` with the number of cards that
/// reference it. Topics without cards get 0.
pub fn reconcile_topic_counts(topics: &mut [Topic], cards: &[Card]) -> Vec<CountChange> {
    let actual_counts = count_cards_by_topic(cards);

    topics
        .iter_mut()
        .map(|topic| {
            let actual = actual_counts.get(&topic.id).copied().unwrap_or(0);
            let change = CountChange {
                topic_id: topic.id.clone(),
                declared: topic.card_count(),
                actual,
            };
            topic.set_card_count(actual);
            change
        })
        .collect()
}

/// Topic ids used by cards but missing from `topics`
pub fn orphan_topics(topics: &[Topic], cards: &[Card]) -> Vec<String> {
    let declared: HashSet<&str> = topics.iter().map(|t| t.id.as_str()).collect();
    count_cards_by_topic(cards)
        .into_keys()
        .filter(|id| !declared.contains(id.as_str()))
        .collect()
}

// ============================================================================
// Ukrainian Translations
// ============================================================================

/// Rough Russian to Ukrainian conversion.
///
/// Known topic titles map directly; otherwise the first matching adjective
/// ending is rewritten. Anything else passes through unchanged.
pub fn translate_ru_to_uk(russian: &str) -> String {
    if russian.is_empty() {
        return String::new();
    }

    if let Some(ukrainian) = lookup(RU_TO_UK_TITLES, russian) {
        return ukrainian.to_string();
    }

    for (ru_ending, uk_ending) in RU_TO_UK_ENDINGS {
        if let Some(stem) = russian.strip_suffix(ru_ending) {
            return format!("{}{}", stem, uk_ending);
        }
    }

    russian.to_string()
}

/// Fill every empty `translation_uk`. Returns how many cards were filled.
pub fn fill_ukrainian_translations(cards: &mut [Card]) -> usize {
    let mut added = 0;
    for card in cards.iter_mut().filter(|c| c.translation_uk.is_empty()) {
        card.translation_uk = translate_ru_to_uk(&card.translation_ru);
        added += 1;
    }
    added
}

// ============================================================================
// Runs
// ============================================================================

/// Phase 1: rewrite `topics.json` with actual card counts
pub fn fix_card_counts(config: &Config) -> Result<Vec<CountChange>> {
    println!("\n=== Phase 1: Fix Card Counts ===");

    let cards_path = config.cards_path();
    let topics_path = config.topics_path();
    let cards: Vec<Card> = load_json(&cards_path)?;
    let mut topics: Vec<Topic> = load_json(&topics_path)?;

    let changes = reconcile_topic_counts(&mut topics, &cards);

    println!("\nCard Count Analysis:");
    println!("Total cards in cards.json: {}", cards.len());
    println!("\nPer topic:");

    let mut total_declared = 0;
    for change in &changes {
        total_declared += change.declared;
        let status = if change.is_mismatch() { "MISMATCH" } else { "ok" };
        println!(
            "  {:12} - declared: {:2}, actual: {:2} {}",
            change.topic_id, change.declared, change.actual, status
        );
    }

    println!("\nTotal declared in topics.json: {}", total_declared);
    println!("Total actual in cards.json: {}", cards.len());
    println!(
        "Difference: {}",
        cards.len() as i64 - total_declared as i64
    );

    for orphan in orphan_topics(&topics, &cards) {
        tracing::warn!("cards reference undeclared topic {}", orphan);
    }

    let backup = backup_file(&topics_path)?;
    println!("Backup created: {}", backup.display());
    save_json(&topics_path, &topics)?;
    println!("Saved: {}", topics_path.display());

    Ok(changes)
}

/// Phase 2: fill missing Ukrainian translations in `cards.json`
pub fn add_ukrainian_translations(config: &Config) -> Result<usize> {
    println!("\n=== Phase 2: Add Ukrainian Translations ===");

    let cards_path = config.cards_path();
    let mut cards: Vec<Card> = load_json(&cards_path)?;

    let added = fill_ukrainian_translations(&mut cards);

    println!("Translation Results:");
    println!("  Cards with missing Ukrainian: {}", added);
    println!("  Translations added: {}", added);

    let backup = backup_file(&cards_path)?;
    println!("Backup created: {}", backup.display());
    save_json(&cards_path, &cards)?;
    println!("Saved: {}", cards_path.display());

    Ok(added)
}

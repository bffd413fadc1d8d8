use crate::config::Config;
use crate::constants::{CARD_TOPICS, GRAY_SUFFIX};
use crate::error::Result;
use crate::inference::{display_noun, guess_article, translate_ru};
use crate::models::{save_json_with_backup, Card};
use std::fs;
use std::path::{Path, PathBuf};

/// Extensions the generator turns into cards (case-sensitive, as written by the importer)
const CARD_EXTENSIONS: &[&str] = &["png", "jpg"];

// ============================================================================
// Card Construction
// ============================================================================

/// Build the card for one image.
///
/// `file_name` is the canonical asset name, `prefix` the `image_asset` prefix
/// (normally `assets/images/`).
pub fn build_card(topic: &str, file_name: &str, sequence: usize, prefix: &str) -> Card {
    let noun = Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    Card {
        id: format!("{}_{:02}", topic, sequence),
        topic_id: topic.to_string(),
        noun_de: display_noun(&noun),
        article: Some(guess_article(&noun).to_string()),
        phonetic: String::new(),
        translation_ru: translate_ru(&noun),
        translation_uk: String::new(),
        image_asset: format!("{}{}/{}", prefix, topic, file_name),
        extra: serde_json::Map::new(),
    }
}

/// Colour images of one topic folder, sorted by file name
fn topic_images(topic_path: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(topic_path)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        let is_card_image = name
            .rsplit_once('.')
            .is_some_and(|(_, ext)| CARD_EXTENSIONS.contains(&ext));
        if is_card_image && !name.contains(GRAY_SUFFIX) {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

// ============================================================================
// Generation
// ============================================================================

/// Generate cards for every topic folder under `assets_dir`.
///
/// Sequence numbers run across all topics, starting at 1, so ids stay unique
/// even if two topics share a noun.
pub fn generate_cards(assets_dir: &Path, prefix: &str) -> Result<Vec<Card>> {
    let mut cards = Vec::new();
    let mut card_counter = 1;

    for topic in CARD_TOPICS {
        let topic_path = assets_dir.join(topic);
        if !topic_path.is_dir() {
            continue;
        }

        for name in topic_images(&topic_path)? {
            cards.push(build_card(topic, &name, card_counter, prefix));
            card_counter += 1;
        }
    }

    Ok(cards)
}

/// Generate `cards.json` from the asset tree and write it, backing up any
/// previous file. Returns the cards and the output path.
pub fn write_cards(config: &Config) -> Result<(Vec<Card>, PathBuf)> {
    let cards = generate_cards(&config.assets_dir, &config.asset_prefix())?;
    let output = config.cards_path();

    if let Some(backup) = save_json_with_backup(&output, &cards)? {
        println!("Backup created: {}", backup.display());
    }

    Ok((cards, output))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Article;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_build_card() {
        let card = build_card("wohnung", "tuer.png", 7, "assets/images/");
        assert_eq!(card.id, "wohnung_07");
        assert_eq!(card.topic_id, "wohnung");
        assert_eq!(card.noun_de, "Tuer");
        assert_eq!(card.article(), Some(Article::Die));
        assert_eq!(card.translation_ru, "дверь");
        assert_eq!(card.translation_uk, "");
        assert_eq!(card.image_asset, "assets/images/wohnung/tuer.png");
    }

    #[test]
    fn test_build_card_unknown_noun() {
        let card = build_card("tiere", "kaninchen.jpg", 123, "assets/images/");
        assert_eq!(card.id, "tiere_123");
        assert_eq!(card.article(), Some(Article::Das));
        assert_eq!(card.translation_ru, "Kaninchen");
    }

    #[test]
    fn test_generate_cards_skips_gray_and_orders_topics() {
        let tmp = TempDir::new().unwrap();
        let natur = tmp.path().join("natur");
        let fahrzeug = tmp.path().join("fahrzeug");
        fs::create_dir_all(&natur).unwrap();
        fs::create_dir_all(&fahrzeug).unwrap();
        for name in ["baum.png", "baum_gray.png", "berg.jpg", "notes.txt"] {
            fs::write(natur.join(name), b"").unwrap();
        }
        fs::write(fahrzeug.join("auto.png"), b"").unwrap();

        let cards = generate_cards(tmp.path(), "assets/images/").unwrap();
        let ids: Vec<&str> = cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["fahrzeug_01", "natur_02", "natur_03"]);
        assert_eq!(cards[1].image_asset, "assets/images/natur/baum.png");
        assert_eq!(cards[2].noun_de, "Berg");
    }
}

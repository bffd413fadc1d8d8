use image::{Rgb, RgbImage};
use learniq_tools::models::{backup_path, load_json, save_json, Article, Card, Topic};
use learniq_tools::validator::{self, ImageStatus};
use learniq_tools::{fixer, generator, importer, optimizer, Config};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_config(root: &Path, downloads: &Path) -> Config {
    let content = format!(
        "[paths]\ndownload_dir = \"{}\"\n\n[images]\nmax_width = 64\nmax_height = 64\n",
        downloads.display()
    );
    fs::write(root.join("learniq.toml"), content).unwrap();
    Config::load(root).unwrap()
}

fn write_image(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 5 % 256) as u8, (y * 9 % 256) as u8, 90])
    });
    img.save(path).unwrap();
}

fn topic(id: &str, card_count: usize) -> Topic {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "title_ru": "Квартира",
        "card_count": card_count,
    }))
    .unwrap()
}

#[test]
fn import_generate_fix_validate() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("app");
    let downloads = tmp.path().join("downloads");
    fs::create_dir_all(&root).unwrap();

    let wohnung = downloads.join("Wohnung");
    let natur = downloads.join("Natur");
    fs::create_dir_all(&wohnung).unwrap();
    fs::create_dir_all(&natur).unwrap();
    write_image(&wohnung.join("01 Дверь.png"), 8, 8);
    write_image(&wohnung.join("02 Дверь ч.б.png"), 8, 8);
    write_image(&wohnung.join("03 Кухня (2).jpg"), 8, 8);
    write_image(&natur.join("01 Baum.png"), 8, 8);
    fs::write(natur.join("Thumbs.db"), b"").unwrap();

    let config = write_config(&root, &downloads);

    // stale topic folder from an earlier run is removed
    let stale = config.assets_dir.join("natur").join("old.png");
    fs::create_dir_all(stale.parent().unwrap()).unwrap();
    fs::write(&stale, b"").unwrap();

    let results = importer::import_all(&config).unwrap();
    let processed: usize = results.iter().map(|r| r.processed).sum();
    let skipped: usize = results.iter().map(|r| r.skipped).sum();
    assert_eq!(processed, 4);
    assert_eq!(skipped, 1);
    assert!(!stale.exists());
    assert!(config.assets_dir.join("wohnung/tuer.png").exists());
    assert!(config.assets_dir.join("wohnung/tuer_gray.png").exists());
    assert!(config.assets_dir.join("wohnung/kueche.jpg").exists());
    assert!(config.assets_dir.join("natur/baum.png").exists());

    let (cards, output) = generator::write_cards(&config).unwrap();
    assert_eq!(output, config.cards_path());
    let ids: Vec<&str> = cards.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["natur_01", "wohnung_02", "wohnung_03"]);

    let tuer = &cards[2];
    assert_eq!(tuer.noun_de, "Tuer");
    assert_eq!(tuer.article(), Some(Article::Die));
    assert_eq!(tuer.translation_ru, "дверь");
    assert_eq!(tuer.image_asset, "assets/images/wohnung/tuer.png");

    save_json(
        &config.topics_path(),
        &vec![topic("natur", 10), topic("wohnung", 2), topic("tiere", 3)],
    )
    .unwrap();

    let changes = fixer::fix_card_counts(&config).unwrap();
    assert_eq!(changes.iter().filter(|c| c.is_mismatch()).count(), 2);
    assert!(backup_path(&config.topics_path()).exists());

    let topics: Vec<Topic> = load_json(&config.topics_path()).unwrap();
    let counts: Vec<usize> = topics.iter().map(|t| t.card_count()).collect();
    assert_eq!(counts, vec![1, 2, 0]);
    assert_eq!(counts.iter().sum::<usize>(), cards.len());
    assert_eq!(topics[0].extra["title_ru"], "Квартира");

    let added = fixer::add_ukrainian_translations(&config).unwrap();
    assert_eq!(added, 3);
    let cards: Vec<Card> = load_json(&config.cards_path()).unwrap();
    assert!(cards.iter().all(|c| !c.translation_uk.is_empty()));
    assert!(backup_path(&config.cards_path()).exists());

    let files = validator::scan_image_files(&config.assets_dir, &config.asset_prefix()).unwrap();
    let report = validator::validate_cards(&cards, &files);
    assert!(report.is_success());
    assert_eq!(report.valid, 3);
}

#[test]
fn validator_reports_mismatch_after_conversion() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    let config = Config::load(root).unwrap();

    let natur = config.assets_dir.join("natur");
    fs::create_dir_all(&natur).unwrap();
    write_image(&natur.join("baum.png"), 8, 8);

    let cards = generator::generate_cards(&config.assets_dir, &config.asset_prefix()).unwrap();
    assert_eq!(cards.len(), 1);

    // the card still says .png but the asset is now .jpg
    fs::rename(natur.join("baum.png"), natur.join("baum.jpg")).unwrap();

    let files = validator::scan_image_files(&config.assets_dir, &config.asset_prefix()).unwrap();
    let report = validator::validate_cards(&cards, &files);
    assert_eq!(report.valid, 0);
    assert_eq!(
        report.issues[0].status,
        ImageStatus::PathMismatch {
            expected: "assets/images/natur/baum.jpg".to_string()
        }
    );
}

#[test]
fn optimizer_respects_configured_bounds() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("app");
    fs::create_dir_all(&root).unwrap();
    let config = write_config(&root, &tmp.path().join("downloads"));

    let tiere = config.assets_dir.join("tiere");
    fs::create_dir_all(&tiere).unwrap();
    write_image(&tiere.join("hund.jpg"), 256, 128);
    write_image(&tiere.join("katze 2.jpg"), 256, 128);

    let summary = optimizer::optimize_directory(&config.assets_dir, &config.images).unwrap();
    assert_eq!(summary.found, 1);
    assert_eq!(summary.optimized, 1);
    assert_eq!(
        image::image_dimensions(tiere.join("hund.jpg")).unwrap(),
        (64, 32)
    );
    // duplicates are left untouched
    assert_eq!(
        image::image_dimensions(tiere.join("katze 2.jpg")).unwrap(),
        (256, 128)
    );
}

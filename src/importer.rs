use crate::config::Config;
use crate::constants::{get_token_table, TOPIC_MAPPING};
use crate::error::{readable_entry, PipelineError, Result};
use crate::normalizer::normalize_filename;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Number of renames echoed per topic
const SAMPLE_COUNT: usize = 3;

/// Per-topic import counters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicImport {
    pub source: String,
    pub target: String,
    pub processed: usize,
    pub skipped: usize,
    /// `(original, canonical)` pairs for the first few files
    pub samples: Vec<(String, String)>,
}

/// Copy every image of one download folder into its asset folder under its
/// canonical name.
pub fn import_topic(source_topic: &str, source_dir: &Path, target_dir: &Path) -> Result<TopicImport> {
    let target_topic = target_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut result = TopicImport {
        source: source_topic.to_string(),
        target: target_topic,
        ..Default::default()
    };

    fs::create_dir_all(target_dir)?;

    if !source_dir.is_dir() {
        warn!("source folder missing, skipping: {}", source_dir.display());
        return Ok(result);
    }

    let tokens = get_token_table(source_topic);
    let mut written: HashSet<String> = HashSet::new();

    for entry in WalkDir::new(source_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(readable_entry)
        .filter(|e| e.file_type().is_file())
    {
        let filename = entry.file_name().to_string_lossy();

        let Some(name) = normalize_filename(&filename, tokens) else {
            debug!("skipping {}", filename);
            result.skipped += 1;
            continue;
        };
        let clean_name = name.file_name();

        if !written.insert(clean_name.clone()) {
            warn!(
                "{} normalizes to {}, which this run already wrote; overwriting",
                filename, clean_name
            );
        }

        fs::copy(entry.path(), target_dir.join(&clean_name))?;
        result.processed += 1;

        if result.samples.len() < SAMPLE_COUNT {
            result.samples.push((filename.into_owned(), clean_name));
        }
    }

    Ok(result)
}

/// Rebuild the asset tree from the download folder.
///
/// Existing topic folders are removed first so renamed files do not linger.
pub fn import_all(config: &Config) -> Result<Vec<TopicImport>> {
    if !config.download_dir.is_dir() {
        return Err(PipelineError::MissingDirectory(config.download_dir.clone()));
    }

    println!("\nCleaning existing assets...");
    for (_, target_topic) in TOPIC_MAPPING {
        let target_path = config.assets_dir.join(target_topic);
        if target_path.exists() {
            fs::remove_dir_all(&target_path)?;
            println!("  Removed {}/", target_topic);
        }
    }

    let mut results = Vec::with_capacity(TOPIC_MAPPING.len());
    for (source_topic, target_topic) in TOPIC_MAPPING {
        println!("\nProcessing {} -> {}", source_topic, target_topic);

        let result = import_topic(
            source_topic,
            &config.download_dir.join(source_topic),
            &config.assets_dir.join(target_topic),
        )?;

        for (original, clean) in &result.samples {
            println!("  {} -> {}", original, clean);
        }
        println!(
            "  ✓ Processed {} files (skipped {})",
            result.processed, result.skipped
        );

        results.push(result);
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), name.as_bytes()).unwrap();
    }

    #[test]
    fn test_import_topic_renames_and_counts() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("Wohnung");
        let target = tmp.path().join("assets").join("wohnung");
        fs::create_dir_all(&source).unwrap();
        touch(&source, "01 Дверь.png");
        touch(&source, "02 Окно ч.б.JPG");
        touch(&source, "notes.txt");

        let result = import_topic("Wohnung", &source, &target).unwrap();
        assert_eq!(result.processed, 2);
        assert_eq!(result.skipped, 1);
        assert_eq!(result.target, "wohnung");
        assert!(target.join("tuer.png").exists());
        assert!(target.join("fenster_gray.jpg").exists());
        assert_eq!(
            fs::read_to_string(target.join("tuer.png")).unwrap(),
            "01 Дверь.png"
        );
    }

    #[test]
    fn test_import_topic_missing_source() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("natur");
        let result = import_topic("Natur", &tmp.path().join("Natur"), &target).unwrap();
        assert_eq!(result.processed, 0);
        assert!(target.is_dir());
    }

    #[test]
    fn test_import_all_requires_download_dir() {
        let tmp = TempDir::new().unwrap();
        let mut config = Config::defaults(tmp.path());
        config.download_dir = tmp.path().join("missing");
        assert!(matches!(
            import_all(&config),
            Err(PipelineError::MissingDirectory(_))
        ));
    }
}

//! Cross-check of card image paths against the asset tree.
//!
//! Advisory only: findings are reported, nothing is rewritten.

use crate::constants::{has_extension, IMAGE_EXTENSIONS};
use crate::error::{PipelineError, Result};
use crate::models::Card;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use walkdir::WalkDir;

const ISSUES_PER_TOPIC: usize = 5;
const DETAILED_ISSUES: usize = 20;

/// Classification of one card's `image_asset`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageStatus {
    Valid,
    /// The card has no `image_asset`
    MissingField,
    /// The path does not exist, but a file with the same base name does
    PathMismatch { expected: String },
    NotFound,
}

impl ImageStatus {
    pub fn is_valid(&self) -> bool {
        matches!(self, ImageStatus::Valid)
    }
}

/// A card that failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub card_id: String,
    pub topic_id: String,
    pub image_asset: String,
    pub status: ImageStatus,
}

impl Issue {
    pub fn describe(&self) -> String {
        match &self.status {
            ImageStatus::MissingField => "Missing image_asset field".to_string(),
            ImageStatus::PathMismatch { expected } => {
                format!("Path mismatch: {} -> should be {}", self.image_asset, expected)
            }
            ImageStatus::NotFound => format!("Image not found: {}", self.image_asset),
            ImageStatus::Valid => "ok".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub total: usize,
    pub valid: usize,
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    pub fn is_success(&self) -> bool {
        self.issues.is_empty()
    }

    /// Card ids with issues, grouped by topic
    pub fn issues_by_topic(&self) -> BTreeMap<&str, Vec<&Issue>> {
        let mut grouped: BTreeMap<&str, Vec<&Issue>> = BTreeMap::new();
        for issue in &self.issues {
            grouped.entry(issue.topic_id.as_str()).or_default().push(issue);
        }
        grouped
    }
}

// ============================================================================
// Scanning
// ============================================================================

/// All image files under `assets_dir`, keyed the way cards reference them:
/// `<prefix><path relative to assets_dir>` with `/` separators.
pub fn scan_image_files(assets_dir: &Path, prefix: &str) -> Result<BTreeSet<String>> {
    if !assets_dir.is_dir() {
        return Err(PipelineError::MissingDirectory(assets_dir.to_path_buf()));
    }

    let mut files = BTreeSet::new();
    for entry in WalkDir::new(assets_dir) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if !has_extension(&name, IMAGE_EXTENSIONS) {
            continue;
        }
        if let Ok(rel) = entry.path().strip_prefix(assets_dir) {
            let rel = rel.to_string_lossy().replace('\\', "/");
            files.insert(format!("{}{}", prefix, rel));
        }
    }
    Ok(files)
}

/// Lowercased file name without directory or extension
fn base_name(path: &str) -> String {
    let filename = path.rsplit('/').next().unwrap_or("");
    let stem = match filename.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => filename,
    };
    stem.to_lowercase()
}

// ============================================================================
// Validation
// ============================================================================

/// Classify one image path against the scanned file set
pub fn check_image(image_asset: &str, files: &BTreeSet<String>) -> ImageStatus {
    if image_asset.is_empty() {
        return ImageStatus::MissingField;
    }
    if files.contains(image_asset) {
        return ImageStatus::Valid;
    }

    let wanted = base_name(image_asset);
    match files.iter().find(|f| base_name(f) == wanted) {
        Some(found) => ImageStatus::PathMismatch {
            expected: found.clone(),
        },
        None => ImageStatus::NotFound,
    }
}

pub fn validate_cards(cards: &[Card], files: &BTreeSet<String>) -> ValidationReport {
    let mut report = ValidationReport {
        total: cards.len(),
        ..Default::default()
    };

    for card in cards {
        let status = check_image(&card.image_asset, files);
        if status.is_valid() {
            report.valid += 1;
            continue;
        }
        report.issues.push(Issue {
            card_id: card.id.clone(),
            topic_id: card.topic_id.clone(),
            image_asset: card.image_asset.clone(),
            status,
        });
    }

    report
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// Print the report to stdout
pub fn print_report(report: &ValidationReport) {
    let rule = "=".repeat(60);

    println!("\n✅ Valid images: {}", report.valid);
    println!("❌ Issues found: {}", report.issues.len());

    if !report.issues.is_empty() {
        println!("\n{}", rule);
        println!("ISSUES BY TOPIC:");
        println!("{}", rule);

        for (topic_id, issues) in report.issues_by_topic() {
            println!("\n{}: {} issues", topic_id, issues.len());
            for issue in issues.iter().take(ISSUES_PER_TOPIC) {
                println!("  - {}: {}", issue.card_id, issue.describe());
            }
            if issues.len() > ISSUES_PER_TOPIC {
                println!("  ... and {} more", issues.len() - ISSUES_PER_TOPIC);
            }
        }

        println!("\n{}", rule);
        println!("DETAILED ISSUES:");
        println!("{}", rule);
        for issue in report.issues.iter().take(DETAILED_ISSUES) {
            println!("{} ({}): {}", issue.card_id, issue.topic_id, issue.describe());
        }
        if report.issues.len() > DETAILED_ISSUES {
            println!(
                "\n... and {} more issues",
                report.issues.len() - DETAILED_ISSUES
            );
        }
    }

    println!("\n{}", rule);
    println!("SUMMARY");
    println!("{}", rule);
    println!("Total cards: {}", report.total);
    println!(
        "Valid: {} ({:.1}%)",
        report.valid,
        percent(report.valid, report.total)
    );
    println!(
        "Invalid: {} ({:.1}%)",
        report.issues.len(),
        percent(report.issues.len(), report.total)
    );
}

use crate::error::{PipelineError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// German grammatical article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Article {
    Der,
    Die,
    Das,
}

impl Article {
    pub fn as_str(self) -> &'static str {
        match self {
            Article::Der => "der",
            Article::Die => "die",
            Article::Das => "das",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "der" => Some(Article::Der),
            "die" => Some(Article::Die),
            "das" => Some(Article::Das),
            _ => None,
        }
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A flashcard record from `cards.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub topic_id: String,
    #[serde(default)]
    pub noun_de: String,
    /// Raw article text as stored; see [`Card::article`] for the typed form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article: Option<String>,
    #[serde(default)]
    pub phonetic: String,
    #[serde(default)]
    pub translation_ru: String,
    #[serde(default)]
    pub translation_uk: String,
    #[serde(default)]
    pub image_asset: String,
    /// Fields added by the app that the pipeline does not touch
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Card {
    /// The article, if it is one of der/die/das in any case
    pub fn article(&self) -> Option<Article> {
        self.article
            .as_deref()
            .and_then(|a| Article::parse(&a.trim().to_lowercase()))
    }
}

const CARD_COUNT: &str = "card_count";

/// A topic record from `topics.json`.
///
/// Everything except `id` lives in `extra`, so rewriting a file keeps its
/// key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub id: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Topic {
    /// Declared card count; missing or non-numeric counts read as 0
    pub fn card_count(&self) -> usize {
        self.extra
            .get(CARD_COUNT)
            .and_then(|v| v.as_u64())
            .unwrap_or(0) as usize
    }

    /// Set the count in place, or append it when the record has none
    pub fn set_card_count(&mut self, count: usize) {
        self.extra
            .insert(CARD_COUNT.to_string(), serde_json::Value::from(count));
    }
}

// ============================================================================
// JSON Files
// ============================================================================

/// Read and deserialize a JSON file
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(PipelineError::MissingFile(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Write a value as pretty JSON (2-space indent, UTF-8 kept verbatim)
pub fn save_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut content = serde_json::to_string_pretty(value)?;
    content.push('\n');
    fs::write(path, content)?;
    Ok(())
}

/// Sibling path used for backups: `cards.json` -> `cards.json.backup`
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".backup");
    path.with_file_name(name)
}

/// Copy `path` to its `.backup` sibling, overwriting any previous backup
pub fn backup_file(path: &Path) -> Result<PathBuf> {
    let backup = backup_path(path);
    fs::copy(path, &backup)?;
    Ok(backup)
}

/// Back up `path` if it already exists, then write `value` over it.
///
/// Returns the backup location when one was made.
pub fn save_json_with_backup<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
) -> Result<Option<PathBuf>> {
    let backup = if path.exists() {
        Some(backup_file(path)?)
    } else {
        None
    };
    save_json(path, value)?;
    Ok(backup)
}

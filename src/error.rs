use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;
use walkdir::DirEntry;

/// Errors that abort a pipeline run.
///
/// Per-file problems (bad extensions, undecodable images) are not errors at
/// this level: callers count or log them and keep going.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Image error: {0}")]
    Image(Box<image::ImageError>),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("File not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Unsupported image format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

impl From<image::ImageError> for PipelineError {
    fn from(error: image::ImageError) -> Self {
        PipelineError::Image(Box::new(error))
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;

/// Keep a walked entry, or log why it was unreadable and drop it
pub fn readable_entry(entry: walkdir::Result<DirEntry>) -> Option<DirEntry> {
    match entry {
        Ok(entry) => Some(entry),
        Err(e) => {
            warn!("skipping unreadable entry: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use walkdir::WalkDir;

    #[test]
    fn test_readable_entry_drops_walk_errors() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope");

        let entries: Vec<_> = WalkDir::new(&missing).into_iter().collect();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].is_err());

        let kept: Vec<DirEntry> = WalkDir::new(&missing)
            .into_iter()
            .filter_map(readable_entry)
            .collect();
        assert!(kept.is_empty());
    }

    #[test]
    fn test_readable_entry_keeps_good_entries() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("a.png"), b"").unwrap();

        let kept: Vec<DirEntry> = WalkDir::new(tmp.path())
            .into_iter()
            .filter_map(readable_entry)
            .collect();
        assert_eq!(kept.len(), 2);
    }
}

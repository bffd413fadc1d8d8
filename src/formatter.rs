//! Source rewrites for the Flutter app.
//!
//! `Color.withOpacity(x)` is deprecated in favour of
//! `Color.withValues(alpha: x)`; this rewrites every call under `lib/`.

use crate::error::{readable_entry, PipelineError, Result};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use walkdir::WalkDir;

static WITH_OPACITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.withOpacity\(([^)]+)\)").unwrap());

/// Replace `.withOpacity(value)` with `.withValues(alpha: value)`
pub fn fix_with_opacity(content: &str) -> String {
    WITH_OPACITY
        .replace_all(content, ".withValues(alpha: $1)")
        .into_owned()
}

/// Rewrite one file in place. Returns whether it changed.
pub fn fix_dart_file(path: &Path) -> Result<bool> {
    let original = fs::read_to_string(path)?;
    let fixed = fix_with_opacity(&original);

    if fixed == original {
        return Ok(false);
    }
    fs::write(path, fixed)?;
    Ok(true)
}

/// Fix all Dart files below `source_dir`. Returns the files that changed.
pub fn fix_all_dart_files(source_dir: &Path) -> Result<Vec<PathBuf>> {
    if !source_dir.is_dir() {
        return Err(PipelineError::MissingDirectory(source_dir.to_path_buf()));
    }

    let mut modified = Vec::new();

    for entry in WalkDir::new(source_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(readable_entry)
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "dart"))
    {
        let path = entry.path();
        if fix_dart_file(path)? {
            modified.push(path.to_path_buf());
        }
    }

    Ok(modified)
}

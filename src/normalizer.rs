//! Canonical names for downloaded card images.
//!
//! Downloads arrive as e.g. `01 Дверь ч.б (2).PNG`; the asset tree wants
//! `tuer_gray.png`. [`normalize_filename`] performs that rewrite as a fixed
//! sequence of textual steps.

use crate::constants::{GRAY_MARKERS, GRAY_SUFFIX};
use regex::Regex;
use std::sync::LazyLock;

static EXTENSION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\.(png|jpg)$").unwrap());
static ORDER_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\s+").unwrap());
static PAREN_DUPLICATE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*\(\d+\)$").unwrap());
static BARE_DUPLICATE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+\d+$").unwrap());
static GRAY_DOTTED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*ч\.?\s*б\.?\s*").unwrap());
static GRAY_SHORT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_?чб").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static UNDERSCORES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_+").unwrap());

/// Result of normalizing one filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedName {
    /// Lowercase slug without extension, e.g. `tuer_gray`
    pub slug: String,
    /// Lowercase extension without the dot
    pub extension: String,
    /// Whether the source carried a black-and-white marker
    pub is_gray: bool,
}

impl NormalizedName {
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.slug, self.extension)
    }
}

/// Normalize a raw download filename.
///
/// `tokens` is the optional per-topic table of Russian substrings and their
/// German slugs. Returns `None` when the extension is not an accepted image
/// type or nothing of the name survives cleanup; callers count such files as
/// skipped.
///
/// A name already in canonical form maps to itself. Raw names holding two
/// table tokens are not a fixed point: only one token is translated per
/// pass, so `Ванная комната.png` gives `ванная_zimmer.png` and a second pass
/// gives `badezimmer_zimmer.png`.
pub fn normalize_filename(
    filename: &str,
    tokens: Option<&[(&str, &str)]>,
) -> Option<NormalizedName> {
    let ext_match = EXTENSION.captures(filename)?;
    let extension = ext_match[1].to_lowercase();
    let full = ext_match.get(0)?;
    let name = &filename[..full.start()];

    let name = ORDER_PREFIX.replace(name, "");
    let name = PAREN_DUPLICATE.replace(&name, "");
    let name = BARE_DUPLICATE.replace(&name, "").to_lowercase();

    let is_gray = GRAY_MARKERS.iter().any(|marker| name.contains(marker));

    let name = GRAY_DOTTED.replace_all(&name, "");
    let mut name = GRAY_SHORT.replace_all(&name, "").into_owned();

    if let Some(tokens) = tokens {
        if let Some((token, slug)) = find_token(&name, tokens) {
            name = name.replace(token, slug);
        }
    }

    if is_gray && !name.contains(GRAY_SUFFIX) {
        name.push_str(GRAY_SUFFIX);
    }

    let slug = clean_separators(&name);
    if slug.is_empty() {
        return None;
    }

    Some(NormalizedName {
        slug,
        extension,
        is_gray,
    })
}

/// Pick the token to substitute in `name`.
///
/// Only one token is ever applied. Several tokens can match at once (`ванна`
/// is a prefix of `ванная`), so the longest match wins; equal lengths keep
/// table order.
fn find_token<'a>(name: &str, tokens: &[(&'a str, &'a str)]) -> Option<(&'a str, &'a str)> {
    let mut best: Option<(&str, &str)> = None;
    for &(token, slug) in tokens {
        if !name.contains(token) {
            continue;
        }
        let longer = best.map_or(true, |(current, _)| {
            token.chars().count() > current.chars().count()
        });
        if longer {
            best = Some((token, slug));
        }
    }
    best
}

/// Collapse separators into single underscores, trim them, and lowercase
fn clean_separators(name: &str) -> String {
    let name = WHITESPACE.replace_all(name, "_");
    let name = UNDERSCORES.replace_all(&name, "_");
    name.trim_matches('_').to_lowercase()
}

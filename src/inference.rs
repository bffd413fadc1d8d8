//! Article and translation guesses for generated cards.
//!
//! Both lookups try an exact table match first. Articles then fall back to
//! suffix rules; translations fall back to the capitalized source word.
//! Generated values are estimates and are meant to be reviewed by hand.

use crate::constants::{lookup, KNOWN_ARTICLES, RUS_TRANSLATIONS};
use crate::models::Article;

/// Suffix rules, checked in order. The first rule with a matching suffix wins,
/// so `-chen` diminutives resolve to `das` even though they also end in `-en`.
pub const ARTICLE_RULES: &[(&[&str], Article)] = &[
    (&["chen", "lein"], Article::Das),
    (
        &["ung", "heit", "keit", "schaft", "ei", "ie", "ik", "ion", "taet", "ur"],
        Article::Die,
    ),
    (&["er", "el", "en"], Article::Der),
];

/// Used when neither the table nor a suffix rule applies
pub const DEFAULT_ARTICLE: Article = Article::Der;

/// Guess the article for a noun slug
pub fn guess_article(word: &str) -> Article {
    let word = word.to_lowercase();

    if let Some(article) = lookup(KNOWN_ARTICLES, &word).and_then(Article::parse) {
        return article;
    }

    ARTICLE_RULES
        .iter()
        .find(|(suffixes, _)| suffixes.iter().any(|suffix| word.ends_with(suffix)))
        .map(|&(_, article)| article)
        .unwrap_or(DEFAULT_ARTICLE)
}

/// Russian translation for a noun slug, or the capitalized slug when unknown
pub fn translate_ru(word: &str) -> String {
    match lookup(RUS_TRANSLATIONS, &word.to_lowercase()) {
        Some(translation) => translation.to_string(),
        None => capitalize(word),
    }
}

/// Uppercase the first character and lowercase the rest
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Display form of a slug: `rotes_auto` -> `Rotes Auto`, `t-shirt` -> `T-Shirt`
pub fn display_noun(slug: &str) -> String {
    let mut result = String::with_capacity(slug.len());
    let mut word_start = true;

    for c in slug.chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_alphabetic() {
            if word_start {
                result.extend(c.to_uppercase());
            } else {
                result.extend(c.to_lowercase());
            }
            word_start = false;
        } else {
            result.push(c);
            word_start = true;
        }
    }
    result
}

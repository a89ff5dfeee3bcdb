//! Text preprocessing — normalizes raw extracted text into a token stream
//! suitable for vectorization.
//!
//! Deliberately minimal: aggressive stemming or a full stop-word list would
//! strip the tool names and skills that downstream scoring relies on as
//! signal. Only ~40 common function words are removed.

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimal stop-word set: articles, prepositions, auxiliary verbs,
/// conjunctions. Technical and domain terms are never filtered.
const MINIMAL_STOPWORDS: &[&str] = &[
    "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "from", "up",
    "about", "into", "through", "during", "before", "after", "above", "below", "between", "among",
    "this", "that", "these", "those", "is", "was", "are", "were", "be", "been", "being", "have",
    "has", "had", "do", "does", "did", "will", "would", "could", "should", "may", "might", "must",
    "can", "shall",
];

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("Invalid regex"));

/// Anything that is not a letter, digit, whitespace, or hyphen.
static SPECIAL_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9\s\-]").expect("Invalid regex"));

/// Standalone calendar years (1900–2099), whole-word match.
static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(19|20)\d{2}\b").expect("Invalid regex"));

/// Tokens must be between 2 and 20 characters, inclusive. Shorter tokens
/// (including single-letter acronyms like "C" or "R") are dropped; this
/// matches the source behavior and is a known limitation.
const MIN_TOKEN_LEN: usize = 2;
const MAX_TOKEN_LEN: usize = 20;

/// Normalizes raw text into a cleaned, space-joined token string.
///
/// Total over any input: empty input yields empty output, never fails.
/// Idempotent — a second pass is a no-op.
pub fn preprocess(text: &str) -> String {
    let text = text.to_lowercase();
    let text = WHITESPACE.replace_all(text.trim(), " ");
    let text = SPECIAL_CHARS.replace_all(&text, " ");
    let text = YEAR.replace_all(&text, "");

    text.split_whitespace()
        .filter(|word| (MIN_TOKEN_LEN..=MAX_TOKEN_LEN).contains(&word.len()))
        .filter(|word| !MINIMAL_STOPWORDS.contains(word))
        .collect::<Vec<_>>()
        .join(" ")
}

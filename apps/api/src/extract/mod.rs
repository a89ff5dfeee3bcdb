//! Text extraction — turns an uploaded binary document into a plain string.
//!
//! Trait-based so the backend can be swapped without touching handlers; the
//! default is `PdfTextExtractor` over the `pdf-extract` crate. An OCR-backed
//! implementation would slot in behind the same trait.

pub mod pdf;

pub use pdf::PdfTextExtractor;

use async_trait::async_trait;
use bytes::Bytes;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::AppError;

/// Extracts plain text from an uploaded document.
///
/// Carried in `AppState` as `Arc<dyn TextExtractor>`. Returning empty text
/// is a normal outcome (scanned PDFs with no text layer); the analysis core
/// treats it as a reportable condition, not a fault.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, data: Bytes) -> Result<String, AppError>;
}

static BULLETS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[•➢]").expect("Invalid regex"));
static NON_TEXT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s.,\-]").expect("Invalid regex"));
static NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n+").expect("Invalid regex"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("Invalid regex"));
/// Redacted year placeholders like "20xx" / "19xx", and bare "xx".
static XX_PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bxx\b").expect("Invalid regex"));
static YEAR_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{2}xx\b").expect("Invalid regex"));

/// Cleans raw extracted text: strips bullet glyphs and stray symbols,
/// flattens newlines, normalizes whitespace, and drops redaction
/// placeholders that would otherwise look like tokens.
pub fn clean_extracted_text(text: &str) -> String {
    let text = BULLETS.replace_all(text, "");
    let text = NON_TEXT.replace_all(&text, "");
    let text = NEWLINES.replace_all(&text, " ");
    let text = WHITESPACE.replace_all(text.trim(), " ");
    let text = XX_PLACEHOLDER.replace_all(&text, "");
    let text = YEAR_PLACEHOLDER.replace_all(&text, "");
    text.into_owned()
}

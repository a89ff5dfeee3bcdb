//! PDF text extraction backed by the `pdf-extract` crate.

use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;

use super::{clean_extracted_text, TextExtractor};

/// Default `TextExtractor`: parses the PDF text layer in memory.
///
/// PDFs without a text layer (pure scans) come back empty — that is the
/// caller's reportable empty-text case, not an extraction failure.
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, data: Bytes) -> Result<String, AppError> {
        // PDF parsing is CPU-bound; keep it off the async workers.
        let raw = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("extraction task panicked: {e}")))?
            .map_err(|e| AppError::Extraction(format!("PDF text extraction failed: {e}")))?;

        let cleaned = clean_extracted_text(&raw);
        debug!(
            raw_chars = raw.len(),
            cleaned_chars = cleaned.len(),
            "extracted PDF text"
        );
        Ok(cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_pdf_bytes_is_an_extraction_error() {
        let extractor = PdfTextExtractor;
        let err = extractor
            .extract(Bytes::from_static(b"not a pdf"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }
}

// TF-IDF Analysis Engine
// Implements: text preprocessing, per-call TF-IDF vectorization, keyword
// ranking, cosine-similarity matching, and the orchestrated public operations.
// All statistics are local to one call — nothing is cached across requests.

pub mod handlers;
pub mod orchestrator;
pub mod preprocess;
pub mod ranking;
pub mod similarity;
pub mod vectorizer;

use thiserror::Error;

/// Failures inside the analysis pipeline.
///
/// These never escape as HTTP faults: the orchestrator converts them into
/// structured `{"error": ...}` sections so callers always receive a
/// well-formed response.
#[derive(Debug, Clone, Error)]
pub enum AnalysisError {
    /// Preprocessing left no usable text for a required document.
    #[error("{0}")]
    EmptyInput(String),

    /// The weighting step failed (e.g. no term survived tokenization).
    #[error("TF-IDF analysis failed: {0}")]
    Vectorization(String),
}

/// Rounds to 4 decimal places. Applied at the output boundary only —
/// internal computation keeps full precision.
pub(crate) fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round4_truncates_to_four_decimals() {
        assert_eq!(round4(0.123_456_789), 0.1235);
        assert_eq!(round4(0.1), 0.1);
        assert_eq!(round4(0.0), 0.0);
    }

    #[test]
    fn test_analysis_error_messages() {
        let e = AnalysisError::EmptyInput("resume text is empty after preprocessing".to_string());
        assert!(e.to_string().contains("empty"));

        let e = AnalysisError::Vectorization("empty vocabulary".to_string());
        assert!(e.to_string().starts_with("TF-IDF analysis failed"));
    }
}

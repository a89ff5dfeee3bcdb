//! Analysis orchestration — composes preprocessing, vectorization, ranking,
//! and similarity scoring into the three public operations.
//!
//! Every operation is a pure function of its text inputs: each call builds
//! its own vocabulary and vectors from scratch, so repeated calls with the
//! same input produce identical output and concurrent requests need no
//! coordination.

use serde::Serialize;
use tracing::debug;

use super::preprocess::preprocess;
use super::ranking::{rank_keywords, TopKeyword};
use super::similarity::{score_pair, SimilarityReport};
use super::vectorizer::vectorize;
use super::AnalysisError;

/// Feature cap for a singleton corpus.
pub const SINGLE_DOC_MAX_FEATURES: usize = 50;
/// Feature cap for a joint 2-document corpus — larger because a pairwise
/// vocabulary needs more room to surface overlap.
pub const PAIR_MAX_FEATURES: usize = 100;
/// Top keywords reported per document.
pub const TOP_KEYWORD_COUNT: usize = 15;

/// A section of an analysis response: either the report or a structured
/// error object. Serializes as the report itself or `{"error": "..."}`.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AnalysisOutcome<T> {
    Report(T),
    Failed { error: String },
}

impl<T> From<Result<T, AnalysisError>> for AnalysisOutcome<T> {
    fn from(result: Result<T, AnalysisError>) -> Self {
        match result {
            Ok(report) => AnalysisOutcome::Report(report),
            Err(e) => AnalysisOutcome::Failed {
                error: e.to_string(),
            },
        }
    }
}

/// Single-document analysis result.
#[derive(Debug, Clone, Serialize)]
pub struct KeywordReport {
    pub top_keywords: Vec<TopKeyword>,
}

/// Bundle of both single-document analyses and the pairwise similarity.
///
/// The three sections are independent vectorizations: the singleton corpora
/// use a different feature cap and document-frequency universe than the
/// pair, so weights are not comparable across sections. Each section also
/// fails independently — an empty resume never suppresses the
/// job-description keywords.
#[derive(Debug, Clone, Serialize)]
pub struct ComprehensiveReport {
    pub resume_analysis: AnalysisOutcome<KeywordReport>,
    pub job_description_analysis: AnalysisOutcome<KeywordReport>,
    pub similarity_analysis: AnalysisOutcome<SimilarityReport>,
}

/// Extracts the top TF-IDF keywords from one document.
///
/// The caller decides what the document is (resume or job description);
/// that label is metadata, not a behavioral branch.
pub fn analyze_document(text: &str) -> Result<KeywordReport, AnalysisError> {
    let processed = preprocess(text);
    debug!(
        raw_chars = text.len(),
        processed_chars = processed.len(),
        "preprocessed document"
    );

    if processed.is_empty() {
        return Err(AnalysisError::EmptyInput(
            "No valid text extracted for TF-IDF analysis".to_string(),
        ));
    }

    let dv = vectorize(&[processed.as_str()], SINGLE_DOC_MAX_FEATURES)?;
    debug!(features = dv.terms.len(), "vectorized document");

    let top_keywords = rank_keywords(&dv.terms, &dv.vectors[0], TOP_KEYWORD_COUNT);
    Ok(KeywordReport { top_keywords })
}

/// Scores a resume against a job description over one joint vocabulary.
pub fn analyze_pair(
    resume_text: &str,
    job_text: &str,
) -> Result<SimilarityReport, AnalysisError> {
    let resume = preprocess(resume_text);
    let job = preprocess(job_text);
    debug!(
        resume_chars = resume.len(),
        job_chars = job.len(),
        "preprocessed pair"
    );

    let empty_side = match (resume.is_empty(), job.is_empty()) {
        (true, true) => Some("both texts are empty after preprocessing"),
        (true, false) => Some("resume text is empty after preprocessing"),
        (false, true) => Some("job description text is empty after preprocessing"),
        (false, false) => None,
    };
    if let Some(message) = empty_side {
        return Err(AnalysisError::EmptyInput(message.to_string()));
    }

    let dv = vectorize(&[resume.as_str(), job.as_str()], PAIR_MAX_FEATURES)?;
    debug!(features = dv.terms.len(), "vectorized pair");

    let report = score_pair(&dv.terms, &dv.vectors[0], &dv.vectors[1]);
    debug!(
        similarity = report.similarity_score,
        quality = %report.match_quality,
        common = report.common_keywords.len(),
        "scored pair"
    );
    Ok(report)
}

/// Runs both single-document analyses and the pairwise similarity,
/// isolating failures per section.
pub fn comprehensive(resume_text: &str, job_text: &str) -> ComprehensiveReport {
    ComprehensiveReport {
        resume_analysis: analyze_document(resume_text).into(),
        job_description_analysis: analyze_document(job_text).into(),
        similarity_analysis: analyze_pair(resume_text, job_text).into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Expert in Java and Spring Boot";
    const JOB: &str = "Looking for Java developer with Spring experience";

    #[test]
    fn test_analyze_document_returns_keywords_with_bigrams() {
        let report = analyze_document(
            "Python developer with 5 years experience in machine learning and data science",
        )
        .unwrap();

        assert!(!report.top_keywords.is_empty());
        let terms: Vec<&str> = report.top_keywords.iter().map(|k| k.term.as_str()).collect();
        assert!(terms.contains(&"machine learning"), "missing bigram: {terms:?}");
        assert!(terms.contains(&"data science"), "missing bigram: {terms:?}");
        // "5" is below the length bound, so no "years" bigram with it exists
        assert!(!terms.iter().any(|t| t.contains('5')));
    }

    #[test]
    fn test_analyze_document_caps_keywords_at_fifteen() {
        let text = "alpha bravo charlie delta echo foxtrot golf hotel india juliett \
                    kilo lima mike november oscar papa quebec romeo sierra tango";
        let report = analyze_document(text).unwrap();
        assert_eq!(report.top_keywords.len(), TOP_KEYWORD_COUNT);
    }

    #[test]
    fn test_analyze_document_empty_input_is_an_error() {
        let err = analyze_document("").unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyInput(_)));

        // Stop-word-only input also preprocesses to nothing
        let err = analyze_document("the and of with").unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyInput(_)));
    }

    #[test]
    fn test_analyze_pair_finds_shared_terms() {
        let report = analyze_pair(RESUME, JOB).unwrap();
        assert!(report.similarity_score > 0.0);

        let common: Vec<&str> = report
            .common_keywords
            .iter()
            .map(|k| k.term.as_str())
            .collect();
        assert!(common.contains(&"java"), "java missing from {common:?}");
        assert!(common.contains(&"spring"), "spring missing from {common:?}");
    }

    #[test]
    fn test_analyze_pair_empty_resume_names_the_side() {
        let err = analyze_pair("", "Java developer").unwrap_err();
        assert!(err.to_string().contains("resume text is empty"));
    }

    #[test]
    fn test_analyze_pair_empty_job_names_the_side() {
        let err = analyze_pair("Java developer", "").unwrap_err();
        assert!(err.to_string().contains("job description text is empty"));
    }

    #[test]
    fn test_analyze_pair_both_empty() {
        let err = analyze_pair("", "").unwrap_err();
        assert!(err.to_string().contains("both texts are empty"));
    }

    #[test]
    fn test_operations_are_deterministic() {
        let a = analyze_pair(RESUME, JOB).unwrap();
        let b = analyze_pair(RESUME, JOB).unwrap();
        assert_eq!(a.similarity_score, b.similarity_score);
        assert_eq!(a.total_features, b.total_features);
        assert_eq!(a.common_keywords.len(), b.common_keywords.len());

        let k1 = analyze_document(RESUME).unwrap();
        let k2 = analyze_document(RESUME).unwrap();
        let terms = |r: &KeywordReport| {
            r.top_keywords
                .iter()
                .map(|k| (k.term.clone(), k.score))
                .collect::<Vec<_>>()
        };
        assert_eq!(terms(&k1), terms(&k2));
    }

    #[test]
    fn test_comprehensive_sections_fail_independently() {
        let report = comprehensive("", JOB);

        assert!(
            matches!(report.resume_analysis, AnalysisOutcome::Failed { .. }),
            "empty resume must fail its section"
        );
        assert!(
            matches!(report.job_description_analysis, AnalysisOutcome::Report(_)),
            "job section must survive the resume failure"
        );
        assert!(matches!(
            report.similarity_analysis,
            AnalysisOutcome::Failed { .. }
        ));
    }

    #[test]
    fn test_comprehensive_happy_path_has_all_sections() {
        let report = comprehensive(RESUME, JOB);
        assert!(matches!(report.resume_analysis, AnalysisOutcome::Report(_)));
        assert!(matches!(
            report.job_description_analysis,
            AnalysisOutcome::Report(_)
        ));
        assert!(matches!(
            report.similarity_analysis,
            AnalysisOutcome::Report(_)
        ));
    }

    #[test]
    fn test_outcome_serializes_report_or_error_object() {
        let ok: AnalysisOutcome<KeywordReport> = analyze_document(RESUME).into();
        let json = serde_json::to_value(&ok).unwrap();
        assert!(json.get("top_keywords").is_some());
        assert!(json.get("error").is_none());

        let failed: AnalysisOutcome<KeywordReport> = analyze_document("").into();
        let json = serde_json::to_value(&failed).unwrap();
        assert_eq!(
            json.get("error").and_then(|e| e.as_str()),
            Some("No valid text extracted for TF-IDF analysis")
        );
    }

    #[test]
    fn test_pair_similarity_stays_in_unit_interval() {
        let cases = [
            (RESUME, JOB),
            ("rust rust rust", "rust rust rust"),
            ("baking bread recipes", "kubernetes container orchestration"),
        ];
        for (a, b) in cases {
            let report = analyze_pair(a, b).unwrap();
            assert!(
                (0.0..=1.0).contains(&report.similarity_score),
                "{} out of range for ({a}, {b})",
                report.similarity_score
            );
        }
    }
}

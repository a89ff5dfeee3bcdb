//! Cosine-similarity scoring between a resume vector and a job-description
//! vector, plus the match-quality band and shared high-weight terms.
//!
//! Both vectors must come from the same joint vectorization call: they share
//! one term universe and are already L2-normalized, so cosine similarity is
//! the plain dot product.

use serde::Serialize;

use super::round4;

/// How many shared terms to report.
const COMMON_KEYWORD_LIMIT: usize = 15;

/// A term with strictly positive weight in both documents.
#[derive(Debug, Clone, Serialize)]
pub struct CommonKeyword {
    pub term: String,
    pub resume_score: f64,
    pub job_desc_score: f64,
    /// Mean of the two weights.
    pub combined_importance: f64,
}

/// Full pairwise similarity result.
#[derive(Debug, Clone, Serialize)]
pub struct SimilarityReport {
    pub similarity_score: f64,
    pub match_quality: String,
    pub common_keywords: Vec<CommonKeyword>,
    /// Size of the joint vocabulary the comparison ran over.
    pub total_features: usize,
}

/// Maps a similarity score onto its quality band. Thresholds are evaluated
/// top-down; first match wins.
pub fn match_quality(similarity: f64) -> &'static str {
    if similarity >= 0.3 {
        "Excellent Match"
    } else if similarity >= 0.2 {
        "Good Match"
    } else if similarity >= 0.1 {
        "Fair Match"
    } else {
        "Poor Match"
    }
}

/// Scores a resume vector against a job-description vector over their shared
/// term universe. Rounding to 4 decimals happens here, at the output
/// boundary; classification and sorting use full precision.
pub fn score_pair(terms: &[String], resume_vec: &[f64], job_vec: &[f64]) -> SimilarityReport {
    let similarity: f64 = resume_vec
        .iter()
        .zip(job_vec)
        .map(|(a, b)| a * b)
        .sum();

    // (term index, combined importance) for terms positive on both sides
    let mut common: Vec<(usize, f64)> = (0..terms.len())
        .filter(|&i| resume_vec[i] > 0.0 && job_vec[i] > 0.0)
        .map(|i| (i, (resume_vec[i] + job_vec[i]) / 2.0))
        .collect();
    common.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    common.truncate(COMMON_KEYWORD_LIMIT);

    let common_keywords = common
        .into_iter()
        .map(|(i, combined)| CommonKeyword {
            term: terms[i].clone(),
            resume_score: round4(resume_vec[i]),
            job_desc_score: round4(job_vec[i]),
            combined_importance: round4(combined),
        })
        .collect();

    SimilarityReport {
        similarity_score: round4(similarity),
        match_quality: match_quality(similarity).to_string(),
        common_keywords,
        total_features: terms.len(),
    }
}

//! Keyword ranking — selects the top-weighted terms from one document vector.

use serde::Serialize;

use super::round4;

/// One ranked term with its rounded TF-IDF weight.
#[derive(Debug, Clone, Serialize)]
pub struct TopKeyword {
    pub term: String,
    pub score: f64,
}

/// Sorts terms by weight descending and keeps the top `k`.
///
/// The sort is stable, so ties fall back to vocabulary order. Zero-weight
/// terms are excluded: a term can sit in the capped vocabulary with zero
/// weight in one document when it only occurs in the other.
pub fn rank_keywords(terms: &[String], weights: &[f64], k: usize) -> Vec<TopKeyword> {
    let mut order: Vec<usize> = (0..terms.len()).collect();
    order.sort_by(|&a, &b| {
        weights[b]
            .partial_cmp(&weights[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    order
        .into_iter()
        .filter(|&i| weights[i] > 0.0)
        .take(k)
        .map(|i| TopKeyword {
            term: terms[i].clone(),
            score: round4(weights[i]),
        })
        .collect()
}

//! Per-call TF-IDF vectorization.
//!
//! The vocabulary and all frequency statistics are built fresh from exactly
//! the documents passed in — a stateless `vectorize(documents, max_features)`
//! function, not a fit/transform object. This keeps cross-request state
//! leakage structurally impossible.
//!
//! Weighting matches the standard smoothed formulation: raw term frequency
//! times `ln((1+N)/(1+df)) + 1`, with each document vector L2-normalized, so
//! cosine similarity downstream is a plain dot product.

use std::collections::{BTreeMap, HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

use super::AnalysisError;

/// Vocabulary units are runs of a letter followed by letters/digits.
/// Input is already lowercased by preprocessing.
static TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[a-zA-Z][a-zA-Z0-9]*\b").expect("Invalid regex"));

/// Output of one joint vectorization call. All vectors share the same term
/// universe, so their weights are directly comparable.
#[derive(Debug, Clone)]
pub struct DocumentVectors {
    /// Retained vocabulary, in sorted order.
    pub terms: Vec<String>,
    /// One L2-normalized weight row per input document, parallel to `terms`.
    pub vectors: Vec<Vec<f64>>,
}

/// Corpus-wide stats for one term.
#[derive(Debug, Default)]
struct TermStats {
    /// Total occurrences across all documents (drives the feature cap).
    total_count: u64,
    /// Number of documents containing the term.
    doc_freq: u32,
}

/// Builds unigram+bigram TF-IDF vectors for `documents`, capped at
/// `max_features` terms selected by descending corpus frequency
/// (alphabetical order breaks ties and is preserved in the output).
///
/// Errors if no term survives tokenization in any document.
pub fn vectorize(
    documents: &[&str],
    max_features: usize,
) -> Result<DocumentVectors, AnalysisError> {
    let per_doc_counts: Vec<HashMap<String, u64>> =
        documents.iter().map(|doc| count_terms(doc)).collect();

    // BTreeMap keeps the vocabulary sorted, matching standard vectorizer order.
    let mut corpus: BTreeMap<&str, TermStats> = BTreeMap::new();
    for counts in &per_doc_counts {
        for (term, count) in counts {
            let stats = corpus.entry(term).or_default();
            stats.total_count += count;
            stats.doc_freq += 1;
        }
    }

    if corpus.is_empty() {
        return Err(AnalysisError::Vectorization(
            "empty vocabulary; no terms survived tokenization".to_string(),
        ));
    }

    let terms = limit_features(&corpus, max_features);

    let n = documents.len() as f64;
    let vectors = per_doc_counts
        .iter()
        .map(|counts| {
            let mut row: Vec<f64> = terms
                .iter()
                .map(|term| {
                    let tf = counts.get(term.as_str()).copied().unwrap_or(0) as f64;
                    let df = f64::from(corpus[term.as_str()].doc_freq);
                    let idf = ((1.0 + n) / (1.0 + df)).ln() + 1.0;
                    tf * idf
                })
                .collect();
            l2_normalize(&mut row);
            row
        })
        .collect();

    Ok(DocumentVectors { terms, vectors })
}

/// Counts unigrams and contiguous bigrams in one document.
fn count_terms(document: &str) -> HashMap<String, u64> {
    let tokens: Vec<&str> = TOKEN.find_iter(document).map(|m| m.as_str()).collect();

    let mut counts: HashMap<String, u64> = HashMap::new();
    for token in &tokens {
        *counts.entry((*token).to_string()).or_insert(0) += 1;
    }
    for pair in tokens.windows(2) {
        *counts.entry(format!("{} {}", pair[0], pair[1])).or_insert(0) += 1;
    }
    counts
}

/// Keeps the `max_features` most frequent terms, preserving sorted order.
/// The stable sort makes alphabetical order the tie-break for equal counts.
fn limit_features(corpus: &BTreeMap<&str, TermStats>, max_features: usize) -> Vec<String> {
    if corpus.len() <= max_features {
        return corpus.keys().map(|t| (*t).to_string()).collect();
    }

    let mut by_frequency: Vec<&str> = corpus.keys().copied().collect();
    by_frequency.sort_by(|a, b| corpus[b].total_count.cmp(&corpus[a].total_count));
    let kept: HashSet<&str> = by_frequency.into_iter().take(max_features).collect();

    corpus
        .keys()
        .filter(|t| kept.contains(**t))
        .map(|t| (*t).to_string())
        .collect()
}

fn l2_normalize(row: &mut [f64]) {
    let norm = row.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm > 0.0 {
        for v in row.iter_mut() {
            *v /= norm;
        }
    }
}

//! TF-IDF vectorization over a per-call corpus.
//!
//! The vocabulary is derived from the given corpus only and is never
//! persisted or reused — every ranking request refits from scratch.

use std::collections::{BTreeSet, HashMap, HashSet};

/// Computes a dense TF-IDF vector for every document in the corpus, using a
/// single shared vocabulary derived from this corpus.
///
/// Term frequency is the raw in-document count; the inverse document
/// frequency is smoothed: `idf(t) = ln((1 + n) / (1 + df(t))) + 1`.
pub fn fit_transform(corpus: &[Vec<String>]) -> Vec<Vec<f64>> {
    let vocabulary: BTreeSet<&str> = corpus
        .iter()
        .flatten()
        .map(String::as_str)
        .collect();
    let index: HashMap<&str, usize> = vocabulary
        .iter()
        .enumerate()
        .map(|(i, term)| (*term, i))
        .collect();

    let mut df = vec![0u32; index.len()];
    for doc in corpus {
        let unique: HashSet<&str> = doc.iter().map(String::as_str).collect();
        for term in unique {
            df[index[term]] += 1;
        }
    }

    let n = corpus.len() as f64;
    let idf: Vec<f64> = df
        .iter()
        .map(|&d| ((1.0 + n) / (1.0 + d as f64)).ln() + 1.0)
        .collect();

    corpus
        .iter()
        .map(|doc| {
            let mut row = vec![0.0f64; index.len()];
            for term in doc {
                row[index[term.as_str()]] += 1.0;
            }
            for (j, value) in row.iter_mut().enumerate() {
                *value *= idf[j];
            }
            row
        })
        .collect()
}

/// Cosine similarity in [0, 1]. Defined as 0 when either norm is 0, so a
/// document with no vocabulary overlap yields 0 rather than an error.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for i in 0..a.len() {
        dot += a[i] * b[i];
        norm_a += a[i] * a[i];
        norm_b += b[i] * b[i];
    }
    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom < 1e-12 {
        return 0.0;
    }
    (dot / denom).clamp(0.0, 1.0)
}

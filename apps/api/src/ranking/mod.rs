//! Resume ranking — pluggable, trait-based ranker that scores resume texts
//! against a job description.
//!
//! Default: `TfidfRanker` (pure-Rust TF-IDF + cosine, deterministic, fully
//! testable). `AppState` holds an `Arc<dyn Ranker>` so a future semantic
//! backend can be swapped in at startup without touching the handlers.

pub mod report;
pub mod tfidf;
pub mod tokenizer;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::ranking::tfidf::{cosine_similarity, fit_transform};
use crate::ranking::tokenizer::tokenize;

/// The ranker trait. Implement this to swap scoring backends without
/// touching the endpoint, handler, or caller code.
///
/// The returned scores are index-aligned with `resumes` and lie in [0, 100].
#[async_trait]
pub trait Ranker: Send + Sync {
    async fn rank(&self, job_description: &str, resumes: &[String]) -> Result<Vec<f64>, AppError>;
}

/// Default TF-IDF + cosine similarity ranker. Stateless: every call refits
/// the vocabulary from that call's corpus, so concurrent requests share
/// nothing.
pub struct TfidfRanker;

#[async_trait]
impl Ranker for TfidfRanker {
    async fn rank(&self, job_description: &str, resumes: &[String]) -> Result<Vec<f64>, AppError> {
        Ok(rank_by_tfidf(job_description, resumes))
    }
}

/// Scores every resume text against the job description.
///
/// Builds one combined corpus `[job_description] ++ resumes`, fits TF-IDF
/// over it, and returns `cosine(jd, resume) * 100` per resume, in input
/// order. An empty `resumes` returns an empty Vec without fitting anything.
pub fn rank_by_tfidf(job_description: &str, resumes: &[String]) -> Vec<f64> {
    if resumes.is_empty() {
        return Vec::new();
    }

    let corpus: Vec<Vec<String>> = std::iter::once(job_description)
        .chain(resumes.iter().map(String::as_str))
        .map(tokenize)
        .collect();

    let vectors = fit_transform(&corpus);
    let query = &vectors[0];

    vectors[1..]
        .iter()
        .map(|candidate| cosine_similarity(query, candidate) * 100.0)
        .collect()
}

//! Similarity Scorer: cosine similarity of the two TF-IDF vectors as a 0-100 score.

use thiserror::Error;
use tracing::debug;

use crate::analysis::weighting::TermVector;

/// A zero-norm vector; cosine similarity is undefined. Never leaves this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot compute cosine similarity of a zero-norm vector")]
struct DegenerateVector;

/// Match score in `[0, 100]`: `round(cosine * 100)`, with degenerate vectors
/// scoring 0.
pub fn match_score(job_description: &TermVector, resume: &TermVector) -> u8 {
    let similarity = cosine_similarity(job_description, resume).unwrap_or_else(|e| {
        debug!("{e}; scoring as 0");
        0.0
    });
    to_percentage(similarity)
}

fn cosine_similarity(a: &TermVector, b: &TermVector) -> Result<f64, DegenerateVector> {
    let denominator = a.norm() * b.norm();
    if denominator == 0.0 || !denominator.is_finite() {
        return Err(DegenerateVector);
    }
    Ok(a.dot(b) / denominator)
}

fn to_percentage(similarity: f64) -> u8 {
    if !similarity.is_finite() {
        return 0;
    }
    (similarity * 100.0).round().clamp(0.0, 100.0) as u8
}

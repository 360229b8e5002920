//! Vocabulary & Term-Weighting Engine.
//!
//! Builds a TF-IDF model over exactly two documents (job description, resume):
//!
//! - `tf(t, d)  = count(t, d) / len(d)`
//! - `idf(t)    = ln((N + 1) / (1 + df(t))) + 1`, with `N = 2`
//! - `w(t, d)   = tf(t, d) * idf(t)`
//!
//! The vocabulary is rebuilt for every request, so weights from two different
//! requests are never comparable and nothing is shared between requests.

use std::collections::HashMap;

use crate::analysis::normalizer::TokenSequence;

/// Number of documents in the per-request corpus.
const CORPUS_SIZE: f64 = 2.0;

/// Shared vocabulary of one request.
///
/// Terms are indexed in first-occurrence order: every job-description term in the
/// order it first appears, followed by resume-only terms. The keyword extractor
/// relies on this ordering for tie-breaking.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    fn insert(&mut self, term: &str) -> usize {
        if let Some(&idx) = self.index.get(term) {
            return idx;
        }
        let idx = self.terms.len();
        self.terms.push(term.to_string());
        self.index.insert(term.to_string(), idx);
        idx
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn term(&self, idx: usize) -> &str {
        &self.terms[idx]
    }

    #[cfg(test)]
    pub fn position(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    #[cfg(test)]
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }
}

/// Dense weight vector over a `Vocabulary`; absent terms weigh 0.
#[derive(Debug, Clone, PartialEq)]
pub struct TermVector {
    weights: Vec<f64>,
}

impl TermVector {
    #[cfg(test)]
    pub(crate) fn zeroed(dims: usize) -> Self {
        Self {
            weights: vec![0.0; dims],
        }
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    #[cfg(test)]
    pub fn weight(&self, idx: usize) -> f64 {
        self.weights.get(idx).copied().unwrap_or(0.0)
    }

    pub fn dot(&self, other: &TermVector) -> f64 {
        self.weights
            .iter()
            .zip(&other.weights)
            .map(|(a, b)| a * b)
            .sum()
    }

    pub fn norm(&self) -> f64 {
        self.weights.iter().map(|w| w * w).sum::<f64>().sqrt()
    }
}

/// Output of the weighting stage: the shared vocabulary plus one vector per document.
#[derive(Debug, Clone)]
pub struct WeightedDocuments {
    pub vocabulary: Vocabulary,
    pub job_description: TermVector,
    pub resume: TermVector,
}

#[cfg(test)]
impl WeightedDocuments {
    /// Weight of `term` in the job description (0 when the term is unknown).
    pub fn job_weight(&self, term: &str) -> f64 {
        self.vocabulary
            .position(term)
            .map(|idx| self.job_description.weight(idx))
            .unwrap_or(0.0)
    }

    /// Weight of `term` in the resume (0 when the term is unknown).
    pub fn resume_weight(&self, term: &str) -> f64 {
        self.vocabulary
            .position(term)
            .map(|idx| self.resume.weight(idx))
            .unwrap_or(0.0)
    }
}

/// Builds the shared vocabulary and both TF-IDF vectors.
pub fn weigh(job_description: &TokenSequence, resume: &TokenSequence) -> WeightedDocuments {
    let mut vocabulary = Vocabulary::default();
    let job_counts = count_terms(&mut vocabulary, job_description);
    let resume_counts = count_terms(&mut vocabulary, resume);

    let dims = vocabulary.len();
    let idf: Vec<f64> = (0..dims)
        .map(|idx| {
            let df = [&job_counts, &resume_counts]
                .iter()
                .filter(|counts| counts.get(idx).copied().unwrap_or(0) > 0)
                .count() as f64;
            smoothed_idf(df)
        })
        .collect();

    WeightedDocuments {
        job_description: tf_idf(&job_counts, job_description.len(), &idf),
        resume: tf_idf(&resume_counts, resume.len(), &idf),
        vocabulary,
    }
}

/// `ln((N + 1) / (1 + df)) + 1`. Strictly positive for `df <= N`.
fn smoothed_idf(df: f64) -> f64 {
    ((CORPUS_SIZE + 1.0) / (1.0 + df)).ln() + 1.0
}

/// Registers the document's terms in the vocabulary and returns raw counts indexed
/// by vocabulary position. The vector covers the vocabulary as it stands after
/// this document; later documents may grow it, so lookups must tolerate short vectors.
fn count_terms(vocabulary: &mut Vocabulary, doc: &TokenSequence) -> Vec<u32> {
    let mut counts: Vec<u32> = Vec::new();
    for token in doc.tokens() {
        let idx = vocabulary.insert(token);
        if idx >= counts.len() {
            counts.resize(idx + 1, 0);
        }
        counts[idx] += 1;
    }
    counts
}

fn tf_idf(counts: &[u32], doc_len: usize, idf: &[f64]) -> TermVector {
    let len = doc_len.max(1) as f64;
    let weights = idf
        .iter()
        .enumerate()
        .map(|(idx, idf)| {
            let count = counts.get(idx).copied().unwrap_or(0) as f64;
            (count / len) * idf
        })
        .collect();
    TermVector { weights }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::normalizer::Normalizer;
    use crate::analysis::ExtractedText;
    use crate::config::AnalysisConfig;

    const EPS: f64 = 1e-12;

    fn seq(text: &str) -> TokenSequence {
        Normalizer::new(&AnalysisConfig::default())
            .normalize(&ExtractedText::resume(text))
            .unwrap()
    }

    #[test]
    fn test_vocabulary_is_union_in_first_occurrence_order() {
        let weighted = weigh(&seq("rust tokio rust axum"), &seq("python rust django"));
        let terms: Vec<&str> = weighted.vocabulary.terms().collect();
        assert_eq!(terms, vec!["rust", "tokio", "axum", "python", "django"]);
    }

    #[test]
    fn test_vectors_are_zero_padded_over_shared_vocabulary() {
        let weighted = weigh(&seq("rust tokio"), &seq("python django"));
        assert_eq!(weighted.job_description.weights().len(), 4);
        assert_eq!(weighted.resume.weights().len(), 4);
        assert_eq!(weighted.job_weight("python"), 0.0);
        assert_eq!(weighted.resume_weight("rust"), 0.0);
    }

    #[test]
    fn test_idf_values_for_two_document_corpus() {
        assert!((smoothed_idf(1.0) - (1.0 + 1.5_f64.ln())).abs() < EPS);
        assert!((smoothed_idf(2.0) - 1.0).abs() < EPS);
        assert!(smoothed_idf(1.0) > smoothed_idf(2.0));
        assert!(smoothed_idf(2.0) > 0.0);
    }

    #[test]
    fn test_tf_is_normalized_by_document_length() {
        // "rust" appears in both docs (idf = 1): weight is count / len.
        let weighted = weigh(&seq("rust rust tokio axum"), &seq("rust"));
        assert!((weighted.job_weight("rust") - 0.5).abs() < EPS);
        assert!((weighted.resume_weight("rust") - 1.0).abs() < EPS);
    }

    #[test]
    fn test_unique_terms_outweigh_shared_terms_at_equal_frequency() {
        let weighted = weigh(&seq("rust kafka"), &seq("rust"));
        assert!(weighted.job_weight("kafka") > weighted.job_weight("rust"));
        let expected = 0.5 * (1.0 + 1.5_f64.ln());
        assert!((weighted.job_weight("kafka") - expected).abs() < EPS);
    }

    #[test]
    fn test_all_weights_are_non_negative() {
        let weighted = weigh(
            &seq("senior rust engineer distributed systems rust"),
            &seq("junior java engineer"),
        );
        for w in weighted
            .job_description
            .weights()
            .iter()
            .chain(weighted.resume.weights())
        {
            assert!(*w >= 0.0);
        }
    }

    #[test]
    fn test_dot_and_norm() {
        let weighted = weigh(&seq("rust"), &seq("rust"));
        assert!((weighted.job_description.dot(&weighted.resume) - 1.0).abs() < EPS);
        assert!((weighted.job_description.norm() - 1.0).abs() < EPS);
    }
}

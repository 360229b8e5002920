//! Keyword Extractor: the job description's top-N terms by TF-IDF weight.

use crate::analysis::weighting::WeightedDocuments;
use crate::analysis::AnalysisError;

/// Returns up to `max_keywords` job-description terms, heaviest first.
///
/// Ties keep first-occurrence order in the job description: the vocabulary is
/// indexed in that order and the sort is stable. Terms that only appear in the
/// resume weigh 0 and are never selected.
pub fn extract_keywords(
    weighted: &WeightedDocuments,
    max_keywords: usize,
) -> Result<Vec<String>, AnalysisError> {
    let mut candidates: Vec<(usize, f64)> = weighted
        .job_description
        .weights()
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, weight)| *weight > 0.0)
        .collect();

    candidates.sort_by(|a, b| b.1.total_cmp(&a.1));
    candidates.truncate(max_keywords);

    if candidates.is_empty() {
        return Err(AnalysisError::InsufficientSignal);
    }

    Ok(candidates
        .into_iter()
        .map(|(idx, _)| weighted.vocabulary.term(idx).to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::normalizer::{Normalizer, TokenSequence};
    use crate::analysis::weighting::weigh;
    use crate::analysis::ExtractedText;
    use crate::config::AnalysisConfig;

    fn seq(text: &str) -> TokenSequence {
        Normalizer::new(&AnalysisConfig::default())
            .normalize(&ExtractedText::job_description(text))
            .unwrap()
    }

    fn keywords(jd: &str, resume: &str, max: usize) -> Vec<String> {
        extract_keywords(&weigh(&seq(jd), &seq(resume)), max).unwrap()
    }

    #[test]
    fn test_heavier_terms_come_first() {
        // kafka appears twice in the JD and never in the resume.
        let kws = keywords("rust kafka kafka", "rust", 10);
        assert_eq!(kws, vec!["kafka", "rust"]);
    }

    #[test]
    fn test_ties_keep_first_occurrence_order() {
        let kws = keywords("zeta alpha mike", "unrelated", 10);
        assert_eq!(kws, vec!["zeta", "alpha", "mike"]);
    }

    #[test]
    fn test_cap_is_respected() {
        let kws = keywords("one1 two2 three3 four4 five5", "other", 3);
        assert_eq!(kws, vec!["one1", "two2", "three3"]);
    }

    #[test]
    fn test_resume_only_terms_are_never_keywords() {
        let kws = keywords("rust", "rust python django", 10);
        assert_eq!(kws, vec!["rust"]);
    }

    #[test]
    fn test_zero_cap_is_insufficient_signal() {
        let weighted = weigh(&seq("rust"), &seq("rust"));
        assert_eq!(
            extract_keywords(&weighted, 0).unwrap_err(),
            AnalysisError::InsufficientSignal
        );
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let jd = "Senior Rust engineer building distributed storage, Rust async, Tokio";
        let resume = "Backend engineer with Go and Rust";
        let first = keywords(jd, resume, 25);
        for _ in 0..10 {
            assert_eq!(keywords(jd, resume, 25), first);
        }
    }
}

//! Analyzer: runs the full pipeline for one (resume, job description) pair.
//!
//! Ingested → Normalized → Weighted → Extracted + Scored → Diffed → Assembled.
//! Each stage either produces its output or aborts with an `AnalysisError`.
//!
//! The analyzer only holds immutable configuration, so one instance is shared by
//! all requests (`Arc<Analyzer>` in `AppState`).

use tracing::debug;

use crate::analysis::diff::diff_keywords;
use crate::analysis::keywords::extract_keywords;
use crate::analysis::normalizer::Normalizer;
use crate::analysis::report::{assemble, MatchReport};
use crate::analysis::similarity::match_score;
use crate::analysis::weighting::weigh;
use crate::analysis::{AnalysisError, ExtractedText, TextSource};
use crate::config::AnalysisConfig;

#[derive(Debug, Clone)]
pub struct Analyzer {
    normalizer: Normalizer,
    max_keywords: usize,
}

impl Analyzer {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            normalizer: Normalizer::new(config),
            max_keywords: config.max_keywords,
        }
    }

    /// Scores `resume_text` against `job_description_text`.
    pub fn analyze(
        &self,
        resume_text: &str,
        job_description_text: &str,
    ) -> Result<MatchReport, AnalysisError> {
        self.analyze_extracted(
            &ExtractedText::resume(resume_text),
            &ExtractedText::job_description(job_description_text),
        )
    }

    pub fn analyze_extracted(
        &self,
        resume: &ExtractedText,
        job_description: &ExtractedText,
    ) -> Result<MatchReport, AnalysisError> {
        // An empty job description means there is nothing to extract keywords from.
        let jd_tokens = self
            .normalizer
            .normalize(job_description)
            .map_err(|e| match e {
                AnalysisError::EmptyInput {
                    document: TextSource::JobDescriptionText,
                } => AnalysisError::InsufficientSignal,
                other => other,
            })?;
        let resume_tokens = self.normalizer.normalize(resume)?;
        debug!(
            jd_tokens = jd_tokens.len(),
            resume_tokens = resume_tokens.len(),
            "normalized"
        );

        let weighted = weigh(&jd_tokens, &resume_tokens);
        debug!(vocabulary = weighted.vocabulary.len(), "weighted");

        let keywords = extract_keywords(&weighted, self.max_keywords)?;
        let score = match_score(&weighted.job_description, &weighted.resume);
        debug!(keywords = keywords.len(), score, "extracted and scored");

        let diff = diff_keywords(&keywords, &resume_tokens);
        debug!(
            matched = diff.matched.len(),
            missing = diff.missing.len(),
            "diffed"
        );

        Ok(assemble(score, diff))
    }
}

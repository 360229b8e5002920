// Resume ↔ job-description matching pipeline.
// Normalize → weight (TF-IDF) → {extract keywords, score} → diff → assemble.
// Everything here is synchronous and allocation-local to one request; the HTTP
// layer lives in handlers.rs.

pub mod diff;
pub mod handlers;
pub mod keywords;
pub mod normalizer;
pub mod pipeline;
pub mod report;
pub mod similarity;
pub mod stop_words;
pub mod weighting;

use std::fmt;

use thiserror::Error;

/// Which side of the comparison a piece of text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSource {
    ResumeText,
    JobDescriptionText,
}

impl fmt::Display for TextSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextSource::ResumeText => write!(f, "resume"),
            TextSource::JobDescriptionText => write!(f, "job description"),
        }
    }
}

/// Plain text handed to the pipeline. May be empty when upstream extraction found
/// nothing; the normalizer turns that into `AnalysisError::EmptyInput`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    pub source: TextSource,
    pub content: String,
}

impl ExtractedText {
    pub fn resume(content: impl Into<String>) -> Self {
        Self {
            source: TextSource::ResumeText,
            content: content.into(),
        }
    }

    pub fn job_description(content: impl Into<String>) -> Self {
        Self {
            source: TextSource::JobDescriptionText,
            content: content.into(),
        }
    }
}

/// Stage failures. Any of these aborts the pipeline; no partial report is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("The {document} contains no usable words after filtering")]
    EmptyInput { document: TextSource },

    #[error("The job description does not contain enough keywords to score against")]
    InsufficientSignal,
}

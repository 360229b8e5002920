//! Report Assembler: the `MatchReport` returned across the API boundary.

use serde::{Deserialize, Serialize};

use crate::analysis::diff::KeywordDiff;

/// Result of one analysis request.
///
/// `matched_keywords` and `missing_keywords` are disjoint and together form the
/// extracted keyword set, in extractor order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    /// 0 to 100
    #[serde(rename = "match_score")]
    pub score: u8,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
}

pub fn assemble(score: u8, diff: KeywordDiff) -> MatchReport {
    MatchReport {
        score,
        matched_keywords: diff.matched,
        missing_keywords: diff.missing,
    }
}

//! Keyword Diff Engine: splits the keyword set into matched and missing.

use crate::analysis::normalizer::TokenSequence;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordDiff {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// A keyword is matched when it is exactly one of the resume's normalized tokens.
/// Both partitions keep the order of `keywords`.
pub fn diff_keywords(keywords: &[String], resume: &TokenSequence) -> KeywordDiff {
    let present = resume.distinct();
    let (matched, missing): (Vec<String>, Vec<String>) = keywords
        .iter()
        .cloned()
        .partition(|keyword| present.contains(keyword.as_str()));
    KeywordDiff { matched, missing }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::normalizer::Normalizer;
    use crate::analysis::ExtractedText;
    use crate::config::AnalysisConfig;

    fn resume(text: &str) -> TokenSequence {
        Normalizer::new(&AnalysisConfig::default())
            .normalize(&ExtractedText::resume(text))
            .unwrap()
    }

    fn kws(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_partitions_preserve_keyword_order() {
        let diff = diff_keywords(
            &kws(&["aws", "python", "kafka", "django"]),
            &resume("Django and Python developer"),
        );
        assert_eq!(diff.matched, kws(&["python", "django"]));
        assert_eq!(diff.missing, kws(&["aws", "kafka"]));
    }

    #[test]
    fn test_exact_match_only() {
        // No stemming: "api" does not match "apis".
        let diff = diff_keywords(&kws(&["api", "rest"]), &resume("REST APIs"));
        assert_eq!(diff.matched, kws(&["rest"]));
        assert_eq!(diff.missing, kws(&["api"]));
    }

    #[test]
    fn test_partitions_are_disjoint_and_cover_keywords() {
        let keywords = kws(&["rust", "go", "java", "sql", "kubernetes"]);
        let diff = diff_keywords(&keywords, &resume("rust sql kubernetes terraform"));

        for m in &diff.matched {
            assert!(!diff.missing.contains(m));
        }
        let mut union: Vec<String> = diff.matched.iter().chain(&diff.missing).cloned().collect();
        union.sort();
        let mut expected = keywords.clone();
        expected.sort();
        assert_eq!(union, expected);
    }

    #[test]
    fn test_empty_keywords_yield_empty_partitions() {
        let diff = diff_keywords(&[], &resume("rust"));
        assert!(diff.matched.is_empty());
        assert!(diff.missing.is_empty());
    }
}

use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::analysis::stop_words::{default_stop_words, parse_stop_word_list};

pub const DEFAULT_MAX_KEYWORDS: usize = 25;
pub const DEFAULT_MIN_TOKEN_LENGTH: usize = 2;
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://localhost:8080";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_NARRATIVE_MODEL: &str = "claude-sonnet-4-5";
const DEFAULT_NARRATIVE_TIMEOUT_SECS: u64 = 90;

/// Tunables of the matching pipeline.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Caps the keyword extractor's output.
    pub max_keywords: usize,
    /// Excluded during normalization.
    pub stop_words: HashSet<String>,
    /// Tokens with fewer characters are dropped.
    pub min_token_length: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_keywords: DEFAULT_MAX_KEYWORDS,
            stop_words: default_stop_words(),
            min_token_length: DEFAULT_MIN_TOKEN_LENGTH,
        }
    }
}

/// Settings for the optional LLM narrative endpoint.
#[derive(Debug, Clone)]
pub struct NarrativeConfig {
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
}

/// Application configuration loaded from environment variables.
/// Every variable is optional; invalid values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub cors_origins: Vec<String>,
    pub max_upload_bytes: usize,
    pub extraction_timeout: Duration,
    pub analysis: AnalysisConfig,
    /// `None` when `ANTHROPIC_API_KEY` is unset; the narrative endpoint then answers 503.
    pub narrative: Option<NarrativeConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let analysis = AnalysisConfig {
            max_keywords: parse_or(&get, "MAX_KEYWORDS", DEFAULT_MAX_KEYWORDS)?,
            stop_words: load_stop_words(
                get("STOP_WORDS_FILE").map(PathBuf::from),
                get("EXTRA_STOP_WORDS"),
            )?,
            min_token_length: parse_or(&get, "MIN_TOKEN_LENGTH", DEFAULT_MIN_TOKEN_LENGTH)?,
        };
        if analysis.max_keywords == 0 {
            bail!("MAX_KEYWORDS must be at least 1");
        }
        if analysis.min_token_length == 0 {
            bail!("MIN_TOKEN_LENGTH must be at least 1");
        }

        let narrative = match get("ANTHROPIC_API_KEY") {
            Some(api_key) => Some(NarrativeConfig {
                api_key,
                model: get("NARRATIVE_MODEL").unwrap_or_else(|| DEFAULT_NARRATIVE_MODEL.to_string()),
                timeout: Duration::from_secs(parse_or(
                    &get,
                    "NARRATIVE_TIMEOUT_SECS",
                    DEFAULT_NARRATIVE_TIMEOUT_SECS,
                )?),
            }),
            None => None,
        };

        let cors_origins = get("CORS_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Ok(Config {
            port: parse_or(&get, "PORT", 8080)?,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            cors_origins,
            max_upload_bytes: parse_or(&get, "MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            extraction_timeout: Duration::from_secs(parse_or(&get, "EXTRACTION_TIMEOUT_SECS", 20)?),
            analysis,
            narrative,
        })
    }

    /// Deadline for one narrative request.
    pub fn narrative_timeout(&self) -> Duration {
        self.narrative
            .as_ref()
            .map(|n| n.timeout)
            .unwrap_or(Duration::from_secs(DEFAULT_NARRATIVE_TIMEOUT_SECS))
    }
}

fn parse_or<T, G>(get: &G, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value '{raw}'")),
        None => Ok(default),
    }
}

/// Built-in list, or the contents of `file` when set, plus comma-separated extras.
fn load_stop_words(file: Option<PathBuf>, extra: Option<String>) -> Result<HashSet<String>> {
    let mut words = match file {
        Some(path) => {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read STOP_WORDS_FILE '{}'", path.display()))?;
            parse_stop_word_list(&contents)
        }
        None => default_stop_words(),
    };
    if let Some(extra) = extra {
        words.extend(
            extra
                .split(',')
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
    }
    Ok(words)
}

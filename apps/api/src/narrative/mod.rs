//! Narrative analysis: a pass-through to a hosted LLM that returns a free-form
//! report (ideal candidate, feedback, suggestions) for a resume / job pair.
//!
//! The response shape is whatever the model produces; it is forwarded as opaque
//! JSON and never validated against the match pipeline's types.
//!
//! `AppState` holds an `Option<Arc<dyn NarrativeProvider>>`: `None` when no API
//! key is configured.

pub mod client;
pub mod handlers;
pub mod prompts;

use async_trait::async_trait;
use serde_json::Value;

use crate::narrative::client::{LlmClient, LlmError};
use crate::narrative::prompts::{build_narrative_prompt, NARRATIVE_SYSTEM};

#[async_trait]
pub trait NarrativeProvider: Send + Sync {
    async fn narrate(&self, resume_text: &str, job_description_text: &str)
        -> Result<Value, LlmError>;
}

/// Provider backed by the Anthropic Messages API.
pub struct LlmNarrativeProvider(pub LlmClient);

#[async_trait]
impl NarrativeProvider for LlmNarrativeProvider {
    async fn narrate(
        &self,
        resume_text: &str,
        job_description_text: &str,
    ) -> Result<Value, LlmError> {
        let prompt = build_narrative_prompt(resume_text, job_description_text);
        self.0.call_json::<Value>(&prompt, NARRATIVE_SYSTEM).await
    }
}

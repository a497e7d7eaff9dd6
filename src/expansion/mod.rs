use std::sync::Arc;

use async_trait::async_trait;

use crate::config::Config;
use crate::data_models::{ExpansionResult, SkipReason};

pub mod gemini;

pub use gemini::GeminiExpander;

/// Errors from the external expansion call. None of these reach callers of
/// [`QueryExpansion::expand`].
#[derive(Debug, thiserror::Error)]
pub enum ExpansionError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API request failed ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("model returned no output")]
    MissingOutput,

    #[error("model output is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Backend that suggests alternative spellings, aliases and misspellings
/// of a name.
///
/// `Ok(None)` means the backend answered without a suggestion list.
#[async_trait]
pub trait QueryExpander: Send + Sync {
    async fn suggest(&self, query: &str) -> Result<Option<Vec<String>>, ExpansionError>;
}

/// Credential-gated wrapper around a [`QueryExpander`] that folds every
/// outcome into an [`ExpansionResult`].
#[derive(Clone)]
pub struct QueryExpansion {
    expander: Option<Arc<dyn QueryExpander>>,
}

impl QueryExpansion {
    pub fn new(expander: Option<Arc<dyn QueryExpander>>) -> Self {
        Self { expander }
    }

    /// Wraps the Gemini backend when a Google API key is configured.
    pub fn from_config(config: &Config) -> Self {
        let expander = config.google_api_key.as_ref().map(|key| {
            Arc::new(GeminiExpander::new(
                key.clone(),
                config.gemini_model.clone(),
                config.gemini_api_base.clone(),
            )) as Arc<dyn QueryExpander>
        });
        Self::new(expander)
    }

    pub fn disabled() -> Self {
        Self::new(None)
    }

    pub fn is_available(&self) -> bool {
        self.expander.is_some()
    }

    /// One attempt, no retry. Never fails.
    pub async fn expand(&self, query: &str) -> ExpansionResult {
        let Some(expander) = self.expander.as_ref() else {
            tracing::warn!(
                "GOOGLE_API_KEY is not set. AI query expansion will be skipped. \
                 To enable AI features, provide a GOOGLE_API_KEY in your environment."
            );
            return ExpansionResult::skipped(query, SkipReason::ApiKeyMissing);
        };

        match expander.suggest(query).await {
            Ok(suggestions) => {
                let suggestions = suggestions.unwrap_or_default();
                tracing::debug!(
                    query = %query,
                    suggestion_count = suggestions.len(),
                    "ai query expansion completed"
                );
                ExpansionResult::performed(query, suggestions)
            }
            Err(e) => {
                tracing::error!(query = %query, error = %e, "query expansion call failed");
                ExpansionResult::skipped(query, SkipReason::FlowExecutionError)
            }
        }
    }
}

impl std::fmt::Debug for QueryExpansion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryExpansion")
            .field("available", &self.is_available())
            .finish()
    }
}

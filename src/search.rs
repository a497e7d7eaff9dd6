use serde::Serialize;

use crate::data_models::{ExpansionResult, SearchResultItem, SkipReason};
use crate::expansion::QueryExpansion;
use crate::link_generator::{self, trim_query};
use crate::selection::PlatformSelection;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("Please enter a name or username to search.")]
    EmptyQuery,

    #[error("Please select at least one platform to search.")]
    NoPlatformsSelected,

    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),
}

/// A short title/description pair shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

impl Notice {
    fn new(title: &str, description: String) -> Self {
        Self {
            title: title.to_string(),
            description,
        }
    }

    /// Tells the user what happened to AI expansion. Every variant ends by
    /// confirming that links use the original term.
    pub fn for_expansion(expansion: &ExpansionResult, query: &str) -> Self {
        match (
            expansion.ai_expansion_performed,
            expansion.ai_expansion_skipped_reason,
        ) {
            (true, _) if !expansion.variations().is_empty() => Notice::new(
                "AI Query Expansion Successful!",
                format!(
                    "AI found {} potential variations. Now searching with your original term: \"{}\".",
                    expansion.variations().len(),
                    query
                ),
            ),
            (true, _) => Notice::new(
                "AI Query Expansion Complete",
                format!(
                    "No additional variations found by AI. Searching with your original term: \"{}\".",
                    query
                ),
            ),
            (false, Some(SkipReason::ApiKeyMissing)) => Notice::new(
                "AI Query Expansion Skipped",
                format!(
                    "AI features are unavailable (API key not configured). Proceeding with original term: \"{}\".",
                    query
                ),
            ),
            (false, _) => Notice::new(
                "AI Query Expansion Notice",
                format!(
                    "AI query expansion could not be performed. Proceeding with original term: \"{}\".",
                    query
                ),
            ),
        }
    }

    pub fn for_completion(results: &[SearchResultItem]) -> Self {
        if results.iter().all(|r| r.links.is_empty()) {
            Notice::new(
                "Search Complete",
                "No direct links found. Try refining your search.".to_string(),
            )
        } else {
            Notice::new("Search Complete!", "Results are displayed below.".to_string())
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub query: String,
    pub expansion: ExpansionResult,
    pub notice: Notice,
    pub completion: Notice,
    pub results: Vec<SearchResultItem>,
}

impl SearchOutcome {
    pub fn total_links(&self) -> usize {
        self.results.iter().map(|r| r.links.len()).sum()
    }
}

/// Runs a full search: validate, expand (informational only), generate links.
#[derive(Debug, Clone)]
pub struct SearchService {
    expansion: QueryExpansion,
}

impl SearchService {
    pub fn new(expansion: QueryExpansion) -> Self {
        Self { expansion }
    }

    pub fn expansion(&self) -> &QueryExpansion {
        &self.expansion
    }

    pub async fn search(
        &self,
        raw_query: &str,
        selection: &PlatformSelection,
    ) -> Result<SearchOutcome, SearchError> {
        let query = trim_query(raw_query);
        if query.is_empty() {
            return Err(SearchError::EmptyQuery);
        }
        if selection.is_empty() {
            return Err(SearchError::NoPlatformsSelected);
        }

        let expansion = self.expansion.expand(query).await;
        let notice = Notice::for_expansion(&expansion, query);

        // Links always come from the original term; expansion is for display.
        let results = link_generator::generate(query, selection.platforms());
        let completion = Notice::for_completion(&results);

        let outcome = SearchOutcome {
            query: query.to_string(),
            expansion,
            notice,
            completion,
            results,
        };

        tracing::info!(
            query = %outcome.query,
            platforms = outcome.results.len(),
            links = outcome.total_links(),
            ai_expansion_performed = outcome.expansion.ai_expansion_performed,
            "search completed"
        );

        Ok(outcome)
    }
}

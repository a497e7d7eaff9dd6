use serde::{Deserialize, Serialize};

use crate::data_models::{ExpansionResult, Platform, SearchLink, SearchResultItem};
use crate::search::Notice;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    /// Platform ids to search. Omitted means every platform.
    #[serde(default)]
    pub platforms: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub expansion: ExpansionResult,
    pub notice: Notice,
    pub completion: Notice,
    pub results: Vec<PlatformResult>,
    pub total_results: usize,
    pub processing_time_ms: u128,
}

#[derive(Debug, Serialize)]
pub struct PlatformResult {
    pub platform: &'static Platform,
    pub links: Vec<LinkResult>,
}

#[derive(Debug, Serialize)]
pub struct LinkResult {
    pub url: String,
    pub query_text: String,
    pub is_direct_attempt: bool,
    pub label: String,
}

impl From<SearchLink> for LinkResult {
    fn from(link: SearchLink) -> Self {
        LinkResult {
            label: link.label(),
            url: link.url,
            query_text: link.query_text,
            is_direct_attempt: link.is_direct_attempt,
        }
    }
}

impl From<SearchResultItem> for PlatformResult {
    fn from(item: SearchResultItem) -> Self {
        PlatformResult {
            platform: item.platform,
            links: item.links.into_iter().map(LinkResult::from).collect(),
        }
    }
}

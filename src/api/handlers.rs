use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;
use std::time::Instant;

use crate::data_models::Platform;
use crate::platforms::PLATFORMS;
use crate::search::{SearchError, SearchService};
use crate::selection::PlatformSelection;

use super::models::{PlatformResult, SearchRequest, SearchResponse};

pub async fn search_handler(
    State(search_service): State<Arc<SearchService>>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, (StatusCode, String)> {
    let start = Instant::now();

    let selection = match &request.platforms {
        Some(ids) => PlatformSelection::from_ids(ids.as_slice()).map_err(bad_request)?,
        None => PlatformSelection::all(),
    };

    let outcome = search_service
        .search(&request.query, &selection)
        .await
        .map_err(bad_request)?;

    let total_results = outcome.total_links();
    let results: Vec<PlatformResult> = outcome
        .results
        .into_iter()
        .map(PlatformResult::from)
        .collect();

    Ok(Json(SearchResponse {
        query: outcome.query,
        expansion: outcome.expansion,
        notice: outcome.notice,
        completion: outcome.completion,
        results,
        total_results,
        processing_time_ms: start.elapsed().as_millis(),
    }))
}

pub async fn platforms_handler() -> Json<&'static [Platform]> {
    Json(PLATFORMS)
}

fn bad_request(e: SearchError) -> (StatusCode, String) {
    tracing::debug!(error = %e, "rejected search request");
    (StatusCode::BAD_REQUEST, e.to_string())
}

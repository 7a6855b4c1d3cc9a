use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    domain::{connection::DataSource, models::SearchResults},
    AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(search))
}

#[derive(Debug, Clone, Deserialize)]
struct SearchQuery {
    q: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponse {
    #[serde(flatten)]
    results: SearchResults,
    data_source: DataSource,
}

/// Aggregate search. Never fails: worst case is an empty result set
/// with a demo-data badge.
#[instrument(name = "GET /search", skip(app_state))]
async fn search(
    State(app_state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<SearchResponse> {
    let results = app_state.search.search_all(&query.q).await;
    tracing::debug!("Found {} results for '{}'", results.total_count(), query.q);

    Json(SearchResponse {
        results,
        data_source: app_state.data_source().await,
    })
}

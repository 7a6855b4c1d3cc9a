use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::{domain::models::Issue, routes::ApiError, AppState};

pub fn router() -> Router<AppState> {
    Router::new().route("/:key", get(issue_by_key))
}

#[instrument(name = "GET /issues/:key", skip(app_state))]
async fn issue_by_key(
    State(app_state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<Issue>, ApiError> {
    app_state
        .search
        .get_issue(&key)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("Issue {key} not found")))
}

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::{domain::models::Document, routes::ApiError, AppState};

pub fn router() -> Router<AppState> {
    Router::new().route("/:id", get(document_by_id))
}

#[instrument(name = "GET /documents/:id", skip(app_state))]
async fn document_by_id(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Document>, ApiError> {
    app_state
        .search
        .get_document(&id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("Document {id} not found")))
}

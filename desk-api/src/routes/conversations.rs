use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    domain::models::{Conversation, Feedback, FeedbackStats},
    routes::ApiError,
    AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(recent_conversations).post(record_conversation))
        .route("/feedback-stats", get(feedback_stats))
        .route("/:id/feedback", post(record_feedback))
}

#[instrument(name = "GET /conversations", skip(app_state))]
async fn recent_conversations(State(app_state): State<AppState>) -> Json<Vec<Conversation>> {
    let log = app_state.conversations.read().await;
    Json(log.iter().cloned().collect())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewConversation {
    category: Option<String>,
    question: String,
    summary: String,
}

#[derive(Serialize)]
struct CreatedConversation {
    id: u64,
}

#[instrument(name = "POST /conversations", skip(app_state))]
async fn record_conversation(
    State(app_state): State<AppState>,
    Json(body): Json<NewConversation>,
) -> Result<(StatusCode, Json<CreatedConversation>), ApiError> {
    if body.question.trim().is_empty() {
        return Err(ApiError::bad_request("Question must not be empty"));
    }

    let mut log = app_state.conversations.write().await;
    let id = log.push(body.category, body.question, body.summary);

    Ok((StatusCode::CREATED, Json(CreatedConversation { id })))
}

#[derive(Debug, Deserialize)]
struct FeedbackBody {
    feedback: Feedback,
}

#[instrument(name = "POST /conversations/:id/feedback", skip(app_state))]
async fn record_feedback(
    State(app_state): State<AppState>,
    Path(id): Path<u64>,
    Json(body): Json<FeedbackBody>,
) -> Result<StatusCode, ApiError> {
    let mut log = app_state.conversations.write().await;
    if log.set_feedback(id, body.feedback) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found(format!("Conversation {id} not found")))
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FeedbackStatsResponse {
    #[serde(flatten)]
    stats: FeedbackStats,
    satisfaction_rate: u8,
}

#[instrument(name = "GET /conversations/feedback-stats", skip(app_state))]
async fn feedback_stats(State(app_state): State<AppState>) -> Json<FeedbackStatsResponse> {
    let stats = app_state.conversations.read().await.feedback_stats();
    Json(FeedbackStatsResponse {
        satisfaction_rate: stats.satisfaction_rate(),
        stats,
    })
}

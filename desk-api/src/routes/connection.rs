use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tracing::instrument;

use crate::{
    domain::connection::{ConnectionState, DataSource},
    AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(connection_status))
        .route("/reconnect", post(reconnect))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConnectionResponse {
    state: ConnectionState,
    data_source: DataSource,
}

#[instrument(name = "GET /connection", skip(app_state))]
async fn connection_status(State(app_state): State<AppState>) -> Json<ConnectionResponse> {
    Json(ConnectionResponse {
        state: app_state.connection.state().await,
        data_source: app_state.data_source().await,
    })
}

#[instrument(name = "POST /connection/reconnect", skip(app_state))]
async fn reconnect(State(app_state): State<AppState>) -> Json<ConnectionResponse> {
    let state = app_state.connection.reconnect().await;
    Json(ConnectionResponse {
        state,
        data_source: app_state.data_source().await,
    })
}

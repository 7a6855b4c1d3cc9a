use axum::{http::Method, routing::get, Router};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::{app_state::AppState, routes};

pub fn create(app_state: AppState, app_url: &str) -> Router<()> {
    let base_app = Router::new()
        .route("/", get(|| async { "desk-api" }))
        .nest("/search", routes::search::router())
        .nest("/issues", routes::issues::router())
        .nest("/documents", routes::documents::router())
        .nest("/connection", routes::connection::router())
        .nest("/conversations", routes::conversations::router());

    let app_url = app_url.to_owned();
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(["content-type".parse().unwrap()])
        .allow_origin(AllowOrigin::predicate(move |origin, _| {
            origin.to_str().unwrap_or_default() == app_url
        }));

    base_app
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}

use std::sync::Arc;

use atlassian::{AtlassianUrl, Credentials};
use desk_api::{
    config::read_config,
    domain::search::{
        source::{AtlassianSource, FixtureSource},
        SharedSource,
    },
    router, AppState,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = read_config().expect("Failed to read configuration");

    let source: SharedSource = if settings.atlassian.use_fixtures {
        tracing::info!("Serving canned fixture data");
        Arc::new(FixtureSource::new())
    } else {
        let base_url = AtlassianUrl::new(settings.atlassian.base_url.clone());
        let credentials = Credentials::new(
            settings.atlassian.cloud_id.clone(),
            settings.atlassian.access_token.clone(),
        );
        Arc::new(AtlassianSource::new(base_url, credentials))
    };

    let app_state = AppState::new(source, settings.atlassian.use_fixtures);

    // Advisory only; requests are served either way.
    let initial_state = app_state.connection.probe().await;
    tracing::info!("Initial connection state: {initial_state:?}");

    let app = router::create(app_state, &settings.application.app_url);

    let listener = tokio::net::TcpListener::bind((
        settings.application.host.as_str(),
        settings.application.port,
    ))
    .await
    .expect("Failed to bind listener");
    tracing::info!(
        "Listening on {}",
        listener.local_addr().expect("listener has no local addr")
    );

    axum::serve(listener, app).await.expect("Server error");
}

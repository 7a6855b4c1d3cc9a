use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{
    connection::{ConnectionMonitor, DataSource},
    models::RecentConversations,
    search::{SearchService, SharedSource},
};

#[derive(Clone)]
pub struct AppState {
    pub search: Arc<SearchService<SharedSource>>,
    pub connection: Arc<ConnectionMonitor<SharedSource>>,
    pub conversations: Arc<RwLock<RecentConversations>>,
    fixture_mode: bool,
}

impl AppState {
    pub fn new(source: SharedSource, fixture_mode: bool) -> Self {
        Self {
            search: Arc::new(SearchService::new(source.clone())),
            connection: Arc::new(ConnectionMonitor::new(source)),
            conversations: Arc::new(RwLock::new(RecentConversations::new())),
            fixture_mode,
        }
    }

    /// Badge for responses. Fixture mode is always demo data, no matter
    /// what the probe says.
    pub async fn data_source(&self) -> DataSource {
        if self.fixture_mode {
            return DataSource::Demo;
        }
        self.connection.data_source().await
    }
}

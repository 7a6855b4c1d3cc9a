//! The knowledge-source port and its error type.
//!
//! Both the live client and the fixture client return raw wire payloads,
//! so normalization applies uniformly regardless of provenance.

use std::sync::Arc;

use async_trait::async_trait;
use atlassian::{
    models::{RawIssue, RawPage, RawProject, RawSpace},
    query::{CqlQuery, JqlQuery},
    AtlassianFetchError,
};

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("upstream rejected credentials")]
    Unauthorized,

    #[error("source fetch error: {0}")]
    SourceError(String),

    #[error("{0}")]
    Other(String),
}

impl From<AtlassianFetchError> for SearchError {
    fn from(e: AtlassianFetchError) -> Self {
        match e {
            AtlassianFetchError::Unauthorized => SearchError::Unauthorized,
            AtlassianFetchError::ResponseError(msg) | AtlassianFetchError::ParsingError(msg) => {
                SearchError::SourceError(msg)
            }
            AtlassianFetchError::Other(msg) => SearchError::Other(msg),
        }
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;

/// Outbound port for the two upstream trackers.
///
/// `list_projects` and `list_spaces` are liveness probes only; nothing
/// they return is shown to users.
#[async_trait]
pub trait KnowledgeSource: Send + Sync + 'static {
    async fn search_issues(&self, jql: &JqlQuery) -> Result<Vec<RawIssue>>;

    async fn search_documents(&self, cql: &CqlQuery) -> Result<Vec<RawPage>>;

    async fn get_issue(&self, key: &str) -> Result<RawIssue>;

    async fn get_document(&self, id: &str) -> Result<RawPage>;

    async fn list_projects(&self) -> Result<Vec<RawProject>>;

    async fn list_spaces(&self) -> Result<Vec<RawSpace>>;
}

/// The source implementation selected by configuration.
pub type SharedSource = Arc<dyn KnowledgeSource>;

#[async_trait]
impl<T: KnowledgeSource + ?Sized> KnowledgeSource for Arc<T> {
    async fn search_issues(&self, jql: &JqlQuery) -> Result<Vec<RawIssue>> {
        (**self).search_issues(jql).await
    }

    async fn search_documents(&self, cql: &CqlQuery) -> Result<Vec<RawPage>> {
        (**self).search_documents(cql).await
    }

    async fn get_issue(&self, key: &str) -> Result<RawIssue> {
        (**self).get_issue(key).await
    }

    async fn get_document(&self, id: &str) -> Result<RawPage> {
        (**self).get_document(id).await
    }

    async fn list_projects(&self) -> Result<Vec<RawProject>> {
        (**self).list_projects().await
    }

    async fn list_spaces(&self) -> Result<Vec<RawSpace>> {
        (**self).list_spaces().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Verify the port is object-safe (can be used as a trait object)
    fn _assert_object_safe(_: &dyn KnowledgeSource) {}

    #[test]
    fn fetch_errors_map_to_search_errors() {
        let err: SearchError = AtlassianFetchError::Unauthorized.into();
        assert!(matches!(err, SearchError::Unauthorized));

        let err: SearchError = AtlassianFetchError::ResponseError("timeout".into()).into();
        assert!(matches!(err, SearchError::SourceError(_)));
    }
}

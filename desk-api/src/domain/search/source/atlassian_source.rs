//! Live knowledge source backed by the Atlassian wire client.

use async_trait::async_trait;
use atlassian::{
    models::{RawIssue, RawPage, RawProject, RawSpace},
    query::{CqlQuery, JqlQuery},
    AtlassianClient, AtlassianUrl, Credentials,
};

use super::super::traits::{KnowledgeSource, Result};

pub struct AtlassianSource {
    client: AtlassianClient,
}

impl AtlassianSource {
    pub fn new(base_url: AtlassianUrl, credentials: Credentials) -> Self {
        Self {
            client: AtlassianClient::new(base_url, credentials),
        }
    }
}

#[async_trait]
impl KnowledgeSource for AtlassianSource {
    async fn search_issues(&self, jql: &JqlQuery) -> Result<Vec<RawIssue>> {
        Ok(self.client.search_issues(jql).await?)
    }

    async fn search_documents(&self, cql: &CqlQuery) -> Result<Vec<RawPage>> {
        Ok(self.client.search_pages(cql).await?)
    }

    async fn get_issue(&self, key: &str) -> Result<RawIssue> {
        Ok(self.client.get_issue(key).await?)
    }

    async fn get_document(&self, id: &str) -> Result<RawPage> {
        Ok(self.client.get_page(id).await?)
    }

    async fn list_projects(&self) -> Result<Vec<RawProject>> {
        Ok(self.client.list_projects().await?)
    }

    async fn list_spaces(&self) -> Result<Vec<RawSpace>> {
        Ok(self.client.list_spaces().await?)
    }
}

use reqwest::header::AUTHORIZATION;
use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;

use crate::{
    models::{RawIssue, RawPage, RawProject, RawSpace},
    query::{CqlQuery, JqlQuery, QueryExpression},
    AtlassianUrl, Credentials,
};

pub struct AtlassianClient {
    http: reqwest::Client,
    base_url: AtlassianUrl,
    credentials: Credentials,
}

impl AtlassianClient {
    pub fn new(base_url: AtlassianUrl, credentials: Credentials) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            credentials,
        }
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        url: impl AsRef<str>,
        params: &[(&str, &str)],
    ) -> Result<T, AtlassianFetchError> {
        let resp = self
            .http
            .get(url.as_ref())
            .query(params)
            .header(AUTHORIZATION, self.credentials.as_bearer_header())
            .send()
            .await
            .map_err(|e| AtlassianFetchError::ResponseError(e.to_string()))?;

        if resp.status() == 401 || resp.status() == 403 {
            return Err(AtlassianFetchError::Unauthorized);
        }

        let resp_data = resp.json::<T>().await.map_err(|e| {
            AtlassianFetchError::ParsingError(format!("Failed to parse response as JSON: {}", e))
        })?;

        Ok(resp_data)
    }

    fn jira_url(&self, path: &str) -> AtlassianUrl {
        self.base_url
            .append_path(&format!("/ex/jira/{}", self.credentials.cloud_id))
            .append_path(path)
    }

    fn confluence_url(&self, path: &str) -> AtlassianUrl {
        self.base_url
            .append_path(&format!("/ex/confluence/{}", self.credentials.cloud_id))
            .append_path(path)
    }

    #[tracing::instrument(skip(self, jql), fields(jql = %jql.as_query_string()))]
    pub async fn search_issues(&self, jql: &JqlQuery) -> Result<Vec<RawIssue>, AtlassianFetchError> {
        let url = self.jira_url("/rest/api/3/search");
        let expr = jql.as_query_string();

        let response: IssueSearchResponse = self
            .fetch(url, &[("jql", expr.as_str()), ("maxResults", "10")])
            .await?;

        Ok(response.issues)
    }

    #[tracing::instrument(skip(self, cql), fields(cql = %cql.as_query_string()))]
    pub async fn search_pages(&self, cql: &CqlQuery) -> Result<Vec<RawPage>, AtlassianFetchError> {
        let url = self.confluence_url("/wiki/rest/api/content/search");
        let expr = cql.as_query_string();

        let response: PageSearchResponse = self
            .fetch(
                url,
                &[("cql", expr.as_str()), ("expand", "body.storage,version,space")],
            )
            .await?;

        Ok(response.results)
    }

    pub async fn get_issue(&self, key: &str) -> Result<RawIssue, AtlassianFetchError> {
        let url = self.jira_url(&format!("/rest/api/3/issue/{}", key));
        self.fetch(url, &[]).await
    }

    pub async fn get_page(&self, id: &str) -> Result<RawPage, AtlassianFetchError> {
        let url = self.confluence_url(&format!("/wiki/rest/api/content/{}", id));
        self.fetch(url, &[("expand", "body.storage,version,space")])
            .await
    }

    /// Used only as a liveness probe; the result is never shown to users.
    pub async fn list_projects(&self) -> Result<Vec<RawProject>, AtlassianFetchError> {
        let url = self.jira_url("/rest/api/3/project/search");
        let response: ProjectListResponse = self.fetch(url, &[]).await?;

        Ok(response.values)
    }

    /// Used only as a liveness probe; the result is never shown to users.
    pub async fn list_spaces(&self) -> Result<Vec<RawSpace>, AtlassianFetchError> {
        let url = self.confluence_url("/wiki/rest/api/space");
        let response: SpaceListResponse = self.fetch(url, &[]).await?;

        Ok(response.results)
    }
}

#[derive(Error, Debug)]
pub enum AtlassianFetchError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("ResponseError: {0}")]
    ResponseError(String),
    #[error("ParsingError: {0}")]
    ParsingError(String),
    #[error("Other: {0}")]
    Other(String),
}

/// Search envelope returned by the issue tracker.
#[derive(Debug, Deserialize)]
pub struct IssueSearchResponse {
    #[serde(default)]
    pub issues: Vec<RawIssue>,
}

/// Search envelope returned by the documentation source.
#[derive(Debug, Deserialize)]
pub struct PageSearchResponse {
    #[serde(default)]
    pub results: Vec<RawPage>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectListResponse {
    #[serde(default)]
    pub values: Vec<RawProject>,
}

#[derive(Debug, Deserialize)]
pub struct SpaceListResponse {
    #[serde(default)]
    pub results: Vec<RawSpace>,
}

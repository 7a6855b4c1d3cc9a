use std::env;

use thiserror::Error;

/// Credentials for an Atlassian cloud site. The access token is an OAuth
/// bearer token scoped to the site identified by `cloud_id`.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub cloud_id: String,
    access_token: String,
}

#[derive(Error, Debug)]
pub enum IntoCredentialsError {
    #[error("Missing cloud id")]
    MissingCloudId,
    #[error("Missing access token")]
    MissingAccessToken,
}

impl Credentials {
    pub fn new(cloud_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            cloud_id: cloud_id.into(),
            access_token: access_token.into(),
        }
    }

    /// Reads `ATLASSIAN_CLOUD_ID` and `ATLASSIAN_ACCESS_TOKEN` from the environment.
    pub fn from_env() -> Result<Self, IntoCredentialsError> {
        let cloud_id =
            env::var("ATLASSIAN_CLOUD_ID").map_err(|_| IntoCredentialsError::MissingCloudId)?;
        let access_token = env::var("ATLASSIAN_ACCESS_TOKEN")
            .map_err(|_| IntoCredentialsError::MissingAccessToken)?;

        Ok(Self::new(cloud_id, access_token))
    }

    pub fn as_bearer_header(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

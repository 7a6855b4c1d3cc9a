use std::env;

#[derive(Debug, Clone)]
pub struct AtlassianUrl(String);

impl AsRef<str> for AtlassianUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AtlassianUrl {
    pub fn new(base: impl Into<String>) -> Self {
        Self(base.into())
    }

    /// Creates a new AtlassianUrl from the environment variable `ATLASSIAN_URL`.
    pub fn from_env() -> Self {
        Self(env::var("ATLASSIAN_URL").expect("ATLASSIAN_URL must be set in env"))
    }

    /// Append the given path to the URL.
    pub fn append_path(&self, path: &str) -> Self {
        let trimmed_url = self.0.trim_end_matches('/');
        let trimmed_path = path.trim_start_matches('/');
        Self(format!("{}/{}", trimmed_url, trimmed_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_path_normalizes_slashes() {
        let url = AtlassianUrl::new("https://api.atlassian.com/");
        assert_eq!(
            url.append_path("/rest/api/3/search").as_ref(),
            "https://api.atlassian.com/rest/api/3/search"
        );
    }
}

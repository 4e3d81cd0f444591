use crate::error::{RepoBrowserError, Result};
use crate::types::Repository;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

const API_BASE_URL: &str = "https://api.github.com";
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(API_BASE_URL.to_string())
    }

    /// Client pointed at an alternate API root, used by tests.
    pub fn with_base_url(base_url: String) -> Result<Self> {
        let client = Client::builder()
            .user_agent("github-repo-browser/0.1.0")
            .timeout(FETCH_TIMEOUT)
            .build()?;

        Ok(GitHubClient { client, base_url })
    }

    /// Fetch the public repositories of a user, in API order. One request,
    /// no pagination: a single page is all the browser displays.
    pub async fn fetch_user_repos(&self, username: &str) -> Result<Vec<Repository>> {
        let url = format!("{}/users/{}/repos", self.base_url, username);
        debug!(%url, "requesting user repositories");

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github.v3+json")
            .send()
            .await?;

        match response.status() {
            reqwest::StatusCode::OK => {}
            reqwest::StatusCode::NOT_FOUND => {
                return Err(RepoBrowserError::NotFound(username.to_string()));
            }
            status => {
                let error_text = response.text().await.unwrap_or_default();
                return Err(RepoBrowserError::ApiError(format!(
                    "API request failed with status {}: {}",
                    status, error_text
                )));
            }
        }

        let body = response.text().await?;
        let repos: Vec<Repository> = serde_json::from_str(&body)?;
        debug!(count = repos.len(), "decoded repositories");
        Ok(repos)
    }
}

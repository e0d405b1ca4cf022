use serde::de::DeserializeOwned;
use tracing::debug;
use ureq::Agent;

use crate::error::{GitHubError, Result};
use crate::models::*;

pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

const USER_AGENT: &str = concat!("github-explorer/", env!("CARGO_PKG_VERSION"));

/// Unauthenticated GitHub REST API client
pub struct GitHubClient {
    agent: Agent,
    base_url: String,
}

impl GitHubClient {
    /// Create a new GitHub client targeting api.github.com
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a new GitHub client with a custom base URL (for GitHub Enterprise or testing)
    pub fn with_base_url(base_url: &str) -> Self {
        // No global timeout: requests wait as long as the transport allows
        let agent = Agent::config_builder()
            .timeout_global(None)
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Check response status and return error if not successful
    fn check_response(
        &self,
        path: &str,
        mut response: ureq::http::Response<ureq::Body>,
    ) -> Result<ureq::http::Response<ureq::Body>> {
        let status = response.status().as_u16();

        if (200..300).contains(&status) {
            return Ok(response);
        }

        // Detect rate limiting: 403 with x-ratelimit-remaining: 0
        if status == 403 {
            if let Some(remaining) = response.headers().get("x-ratelimit-remaining") {
                if remaining.to_str().unwrap_or("") == "0" {
                    return Err(GitHubError::RateLimited);
                }
            }
        }

        if status == 404 {
            return Err(GitHubError::NotFound(path.to_string()));
        }

        let body = response
            .body_mut()
            .read_to_string()
            .unwrap_or_else(|_| String::new());

        // Try to parse as GitHub error response
        let message = if let Ok(error_response) = serde_json::from_str::<serde_json::Value>(&body) {
            error_response
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or(&body)
                .to_string()
        } else if body.is_empty() {
            format!("HTTP {}", status)
        } else {
            body
        };

        Err(GitHubError::Api { status, message })
    }

    /// GET `{base_url}/{path}` and parse the JSON body into `T`
    pub fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!(%url, "GET");

        let response = self
            .agent
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .header("User-Agent", USER_AGENT)
            .call()
            .map_err(GitHubError::Http)?;

        let mut response = self.check_response(path, response)?;
        let body = response.body_mut().read_to_string()?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Get a repository by its `owner/name` identifier
    pub fn get_repo(&self, identifier: &str) -> Result<GitHubRepo> {
        self.get(&format!("repos/{}", identifier))
    }

    /// List open issues of a repository
    ///
    /// Returns the first page exactly as GitHub sends it, pull requests included.
    pub fn list_issues(&self, identifier: &str) -> Result<Vec<GitHubIssue>> {
        self.get(&format!("repos/{}/issues", identifier))
    }
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new()
    }
}

use serde::{Deserialize, Serialize};

/// Repository owner as returned by the API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitHubOwner {
    pub login: String,
    pub id: u64,
    pub avatar_url: String,
}

/// GitHub repository (`GET /repos/{owner}/{repo}`)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitHubRepo {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub owner: GitHubOwner,
    pub html_url: String,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub open_issues: u64,
}

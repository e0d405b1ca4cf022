use serde::{Deserialize, Serialize};

/// Owner of a repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryOwner {
    pub login: String,
    pub avatar_url: String,
}

/// Repository as listed on the dashboard and kept in the persisted list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// `owner/name` identifier
    pub full_name: String,
    pub description: Option<String>,
    pub owner: RepositoryOwner,
}

/// Repository plus the counters shown on the detail view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryDetails {
    #[serde(flatten)]
    pub repository: Repository,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub open_issues: u64,
    pub html_url: String,
}

/// Author of an issue (minimal fields)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueAuthor {
    pub login: String,
}

/// Issue shown on the detail view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub id: u64,
    pub number: u64,
    pub title: String,
    /// Link to the issue page on GitHub
    pub html_url: String,
    pub user: IssueAuthor,
}

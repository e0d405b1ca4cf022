use crate::error::Result;
use crate::models::*;

/// Read-only access to the GitHub REST API
///
/// Identifiers are `owner/name` strings and are forwarded verbatim.
pub trait GitHubApi: Send + Sync {
    /// Fetch the summary record stored on the dashboard
    fn get_repository(&self, identifier: &str) -> Result<Repository>;

    /// Fetch the repository with its counters
    fn get_repository_details(&self, identifier: &str) -> Result<RepositoryDetails>;

    /// List the open issues of a repository (first page only)
    fn list_issues(&self, identifier: &str) -> Result<Vec<Issue>>;
}

/// Persistence for the dashboard's repository list
pub trait RepositoryListStore {
    /// Read the persisted list. Absent or unreadable data yields an empty list.
    fn load(&self) -> Vec<Repository>;

    /// Replace the persisted list with `repositories`
    fn save(&mut self, repositories: &[Repository]) -> Result<()>;
}

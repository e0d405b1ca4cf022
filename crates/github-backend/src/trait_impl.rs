//! Implementation of explorer-core traits for GitHubClient

use explorer_core::{GitHubApi, Issue, Repository, RepositoryDetails, Result};

use crate::client::GitHubClient;
use crate::convert::{github_issue_to_core, github_repo_to_core, github_repo_to_details};

impl GitHubApi for GitHubClient {
    fn get_repository(&self, identifier: &str) -> Result<Repository> {
        let repo = self.get_repo(identifier)?;
        Ok(github_repo_to_core(repo))
    }

    fn get_repository_details(&self, identifier: &str) -> Result<RepositoryDetails> {
        let repo = self.get_repo(identifier)?;
        Ok(github_repo_to_details(repo))
    }

    fn list_issues(&self, identifier: &str) -> Result<Vec<Issue>> {
        let issues = GitHubClient::list_issues(self, identifier)?;
        Ok(issues.into_iter().map(github_issue_to_core).collect())
    }
}

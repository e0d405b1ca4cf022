//! Model conversions from GitHub types to explorer-core types

use explorer_core::{Issue, IssueAuthor, Repository, RepositoryDetails, RepositoryOwner};

use crate::models::*;

/// Login shown for issues whose author account was deleted
const GHOST_LOGIN: &str = "ghost";

pub fn github_repo_to_core(repo: GitHubRepo) -> Repository {
    Repository {
        full_name: repo.full_name,
        description: repo.description,
        owner: RepositoryOwner {
            login: repo.owner.login,
            avatar_url: repo.owner.avatar_url,
        },
    }
}

pub fn github_repo_to_details(repo: GitHubRepo) -> RepositoryDetails {
    let stargazers_count = repo.stargazers_count;
    let forks_count = repo.forks_count;
    let open_issues = repo.open_issues;
    let html_url = repo.html_url.clone();

    RepositoryDetails {
        repository: github_repo_to_core(repo),
        stargazers_count,
        forks_count,
        open_issues,
        html_url,
    }
}

pub fn github_issue_to_core(issue: GitHubIssue) -> Issue {
    Issue {
        id: issue.id,
        number: issue.number,
        title: issue.title,
        html_url: issue.html_url,
        user: IssueAuthor {
            login: issue
                .user
                .map(|u| u.login)
                .unwrap_or_else(|| GHOST_LOGIN.to_string()),
        },
    }
}

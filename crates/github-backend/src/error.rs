use explorer_core::ExplorerError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("HTTP error: {0}")]
    Http(#[from] ureq::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, GitHubError>;

impl From<GitHubError> for ExplorerError {
    fn from(err: GitHubError) -> Self {
        match err {
            GitHubError::Http(e) => ExplorerError::Http(e.to_string()),
            GitHubError::Parse(e) => ExplorerError::Parse(e.to_string()),
            GitHubError::NotFound(path) => ExplorerError::RepositoryNotFound(path),
            GitHubError::RateLimited => ExplorerError::Api {
                status: 429,
                message: "GitHub API rate limit exceeded".to_string(),
            },
            GitHubError::Api { status, message } => ExplorerError::Api { status, message },
        }
    }
}

use thiserror::Error;

/// Errors shared by every layer of the explorer
#[derive(Error, Debug)]
pub enum ExplorerError {
    #[error("Repository not found: {0}")]
    RepositoryNotFound(String),

    #[error("Route not found: {0}")]
    RouteNotFound(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, ExplorerError>;

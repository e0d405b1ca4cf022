use crate::error::{ExplorerError, Result};

const REPOSITORY_PREFIX: &str = "repositories/";

/// Client-side navigation targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    /// Detail view; carries the `owner/name` identifier verbatim
    Repository(String),
}

impl Route {
    /// Resolve a navigation path. A leading `/` is optional.
    pub fn parse(path: &str) -> Result<Self> {
        let trimmed = path.trim().trim_start_matches('/');

        if trimmed.is_empty() {
            return Ok(Route::Dashboard);
        }

        match trimmed.strip_prefix(REPOSITORY_PREFIX) {
            Some(identifier) if !identifier.is_empty() => {
                Ok(Route::Repository(identifier.to_string()))
            }
            _ => Err(ExplorerError::RouteNotFound(path.to_string())),
        }
    }

    /// Path that navigates to this route
    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "/".to_string(),
            Route::Repository(identifier) => format!("/{}{}", REPOSITORY_PREFIX, identifier),
        }
    }
}

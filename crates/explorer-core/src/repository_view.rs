//! Repository detail view: repository header, counters and open issues.

use std::thread;

use tracing::debug;

use crate::cancel::CancellationToken;
use crate::error::{ExplorerError, Result};
use crate::models::{Issue, RepositoryDetails};
use crate::traits::GitHubApi;

/// What the detail view currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    NotLoaded,
    Loaded {
        repository: RepositoryDetails,
        issues: Vec<Issue>,
    },
    Failed(String),
}

pub struct RepositoryView {
    identifier: String,
    state: ViewState,
    token: CancellationToken,
}

impl RepositoryView {
    /// Mount the view for the identifier taken from the route
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            state: ViewState::NotLoaded,
            token: CancellationToken::new(),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Token that cancels pending loads when triggered
    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Stop accepting fetch results
    pub fn unmount(&self) {
        self.token.cancel();
    }

    /// Fetch the repository and its issues concurrently, then apply both at once.
    ///
    /// Does nothing to the state when the view was cancelled while fetching.
    pub fn load(&mut self, api: &dyn GitHubApi) -> &ViewState {
        let identifier = self.identifier.as_str();
        debug!(identifier, "loading repository view");

        let (repository, issues) = thread::scope(|s| {
            let repository = s.spawn(|| api.get_repository_details(identifier));
            let issues = s.spawn(|| api.list_issues(identifier));
            (join(repository), join(issues))
        });

        if self.token.is_cancelled() {
            debug!(identifier, "view unmounted, dropping fetch results");
            return &self.state;
        }

        self.state = match (repository, issues) {
            (Ok(repository), Ok(issues)) => ViewState::Loaded { repository, issues },
            (Err(e), _) | (_, Err(e)) => {
                debug!(identifier, error = %e, "repository view failed to load");
                ViewState::Failed(e.to_string())
            }
        };

        &self.state
    }
}

fn join<T>(handle: thread::ScopedJoinHandle<'_, Result<T>>) -> Result<T> {
    handle
        .join()
        .unwrap_or_else(|_| Err(ExplorerError::Http("fetch thread panicked".to_string())))
}

//! Dashboard view: look up repositories and keep a persisted list of them.

use thiserror::Error;
use tracing::{debug, warn};

use crate::locale::Locale;
use crate::models::Repository;
use crate::routes::Route;
use crate::traits::{GitHubApi, RepositoryListStore};

/// Inline error shown under the identifier field
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    #[error("no repository identifier entered")]
    EmptyInput,

    #[error("failed to fetch repository: {reason}")]
    FetchFailed { reason: String },
}

impl DashboardError {
    /// Human-readable message in the given locale
    pub fn message(&self, locale: Locale) -> &'static str {
        match self {
            DashboardError::EmptyInput => locale.empty_input(),
            DashboardError::FetchFailed { .. } => locale.fetch_failed(),
        }
    }
}

pub struct Dashboard<S: RepositoryListStore> {
    store: S,
    new_repo: String,
    error: Option<DashboardError>,
    repositories: Vec<Repository>,
}

impl<S: RepositoryListStore> Dashboard<S> {
    /// Create the view, reading the persisted list once
    pub fn new(store: S) -> Self {
        let repositories = store.load();
        debug!(count = repositories.len(), "loaded repository list");

        Self {
            store,
            new_repo: String::new(),
            error: None,
            repositories,
        }
    }

    pub fn new_repo(&self) -> &str {
        &self.new_repo
    }

    pub fn set_new_repo(&mut self, value: impl Into<String>) {
        self.new_repo = value.into();
    }

    pub fn error(&self) -> Option<&DashboardError> {
        self.error.as_ref()
    }

    pub fn repositories(&self) -> &[Repository] {
        &self.repositories
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Navigation targets for each listed repository, in list order
    pub fn links(&self) -> Vec<Route> {
        self.repositories
            .iter()
            .map(|r| Route::Repository(r.full_name.clone()))
            .collect()
    }

    /// Submit the identifier field.
    ///
    /// On success the fetched repository is appended, the field and error are
    /// cleared, and the whole list is written back to the store. On failure
    /// the error is set and the list and field are left untouched.
    pub fn handle_add_repository(
        &mut self,
        api: &dyn GitHubApi,
    ) -> std::result::Result<&Repository, DashboardError> {
        let identifier = self.new_repo.as_str();

        if identifier.trim().is_empty() {
            self.error = Some(DashboardError::EmptyInput);
            return Err(DashboardError::EmptyInput);
        }

        match api.get_repository(identifier) {
            Ok(repository) => {
                debug!(full_name = %repository.full_name, "adding repository");
                self.repositories.push(repository);
                self.new_repo.clear();
                self.error = None;
                self.persist();
                Ok(&self.repositories[self.repositories.len() - 1])
            }
            Err(e) => {
                debug!(identifier, error = %e, "repository lookup failed");
                let err = DashboardError::FetchFailed {
                    reason: e.to_string(),
                };
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.repositories) {
            warn!(error = %e, "failed to persist repository list");
        }
    }
}

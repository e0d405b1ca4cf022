pub mod cancel;
pub mod dashboard;
pub mod error;
pub mod locale;
pub mod models;
pub mod repository_view;
pub mod routes;
pub mod traits;

pub use cancel::CancellationToken;
pub use dashboard::{Dashboard, DashboardError};
pub use error::{ExplorerError, Result};
pub use locale::Locale;
pub use models::*;
pub use repository_view::{RepositoryView, ViewState};
pub use routes::Route;
pub use traits::{GitHubApi, RepositoryListStore};

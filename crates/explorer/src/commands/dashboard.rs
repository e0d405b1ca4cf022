use crate::cli::OutputFormat;
use crate::output::render_dashboard;
use crate::storage::RepositoryStore;
use anyhow::Result;
use explorer_core::{Dashboard, GitHubApi, Locale};
use std::process::ExitCode;

/// Submit `identifier` on the dashboard and render the result
pub fn handle_add(
    api: &dyn GitHubApi,
    store: RepositoryStore,
    identifier: &str,
    locale: Locale,
    format: OutputFormat,
) -> Result<ExitCode> {
    let mut dashboard = Dashboard::new(store);
    dashboard.set_new_repo(identifier);

    let status = match dashboard.handle_add_repository(api) {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::from(1),
    };

    println!("{}", render_dashboard(&dashboard, locale, format));
    Ok(status)
}

pub fn handle_list(store: RepositoryStore, locale: Locale, format: OutputFormat) -> Result<ExitCode> {
    let dashboard = Dashboard::new(store);
    println!("{}", render_dashboard(&dashboard, locale, format));
    Ok(ExitCode::SUCCESS)
}

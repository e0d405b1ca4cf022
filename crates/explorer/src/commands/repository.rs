use crate::cli::OutputFormat;
use crate::output::render_repository_view;
use anyhow::{Context, Result};
use explorer_core::{GitHubApi, Locale, RepositoryView, ViewState};
use std::process::ExitCode;

/// Mount the detail view for `identifier`, load it and render it
pub fn handle_show(
    api: &dyn GitHubApi,
    identifier: &str,
    locale: Locale,
    format: OutputFormat,
) -> Result<ExitCode> {
    let mut view = RepositoryView::new(identifier);
    let status = match view.load(api) {
        ViewState::Failed(_) => ExitCode::from(1),
        _ => ExitCode::SUCCESS,
    };

    println!("{}", render_repository_view(&view, locale, format));
    view.unmount();
    Ok(status)
}

/// Open the repository page, or one of its issues, in the browser
pub fn handle_open(
    api: &dyn GitHubApi,
    identifier: &str,
    issue: Option<u64>,
    print_only: bool,
) -> Result<ExitCode> {
    let details = api
        .get_repository_details(identifier)
        .with_context(|| format!("Failed to fetch repository '{}'", identifier))?;

    let url = match issue {
        Some(number) => format!("{}/issues/{}", details.html_url, number),
        None => details.html_url,
    };

    if !print_only {
        open::that(&url).with_context(|| format!("Failed to open {}", url))?;
    }
    println!("{}", url);
    Ok(ExitCode::SUCCESS)
}

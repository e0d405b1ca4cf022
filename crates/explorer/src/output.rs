use crate::cli::OutputFormat;
use colored::Colorize;
use explorer_core::{
    Dashboard, Issue, Locale, Repository, RepositoryDetails, RepositoryListStore,
    RepositoryView, Route, ViewState,
};
use serde::Serialize;

#[derive(Serialize)]
pub struct JsonError {
    pub error: bool,
    pub code: String,
    pub message: String,
}

pub fn output_error(err: &anyhow::Error, format: OutputFormat) {
    let message = match format {
        OutputFormat::Json => {
            let json_err = JsonError {
                error: true,
                code: "error".to_string(),
                message: format!("{:#}", err),
            };
            serde_json::to_string_pretty(&json_err)
                .unwrap_or_else(|_| format!(r#"{{"error": true, "message": "{}"}}"#, err))
        }
        OutputFormat::Text => format!("{}: {:#}", "Error".red().bold(), err),
    };
    eprintln!("{}", message);
}

#[derive(Serialize)]
struct DashboardEntry<'a> {
    #[serde(flatten)]
    repository: &'a Repository,
    link: String,
}

#[derive(Serialize)]
struct DashboardJson<'a> {
    new_repo: &'a str,
    error: Option<&'static str>,
    repositories: Vec<DashboardEntry<'a>>,
}

pub fn render_dashboard<S: RepositoryListStore>(
    dashboard: &Dashboard<S>,
    locale: Locale,
    format: OutputFormat,
) -> String {
    let error = dashboard.error().map(|e| e.message(locale));

    match format {
        OutputFormat::Json => {
            let json = DashboardJson {
                new_repo: dashboard.new_repo(),
                error,
                repositories: dashboard
                    .repositories()
                    .iter()
                    .zip(dashboard.links())
                    .map(|(repository, route)| DashboardEntry {
                        repository,
                        link: route.path(),
                    })
                    .collect(),
            };
            serde_json::to_string_pretty(&json).unwrap_or_default()
        }
        OutputFormat::Text => {
            let mut output = locale.title().bold().to_string();

            if let Some(message) = error {
                output.push_str(&format!("\n{}", message.red()));
            }

            for (repository, route) in dashboard.repositories().iter().zip(dashboard.links()) {
                output.push_str(&format!("\n\n{}", repository_summary(repository)));
                output.push_str(&format!("\n  {} {}", ">".dimmed(), route.path().cyan()));
            }

            output
        }
    }
}

fn repository_summary(repository: &Repository) -> String {
    let mut output = format!(
        "{}  {}",
        repository.full_name.white().bold(),
        format!("@{}", repository.owner.login).dimmed()
    );

    if let Some(desc) = &repository.description {
        output.push_str(&format!("\n  {}", desc));
    }
    output.push_str(&format!("\n  {}: {}", "Avatar".dimmed(), repository.owner.avatar_url));

    output
}

#[derive(Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
enum ViewJson<'a> {
    NotLoaded,
    Loaded {
        repository: &'a RepositoryDetails,
        issues: &'a [Issue],
    },
    Failed {
        error: &'a str,
    },
}

pub fn render_repository_view(view: &RepositoryView, locale: Locale, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => {
            let json = match view.state() {
                ViewState::NotLoaded => ViewJson::NotLoaded,
                ViewState::Loaded { repository, issues } => ViewJson::Loaded { repository, issues },
                ViewState::Failed(reason) => ViewJson::Failed { error: reason },
            };
            serde_json::to_string_pretty(&json).unwrap_or_default()
        }
        OutputFormat::Text => {
            let mut output = format!("{} {}", "<".dimmed(), locale.back().dimmed());
            output.push_str(&format!(" ({})", Route::Dashboard.path()).dimmed().to_string());

            match view.state() {
                ViewState::NotLoaded => {}
                ViewState::Loaded { repository, issues } => {
                    output.push_str(&format!("\n\n{}", repository_summary(&repository.repository)));
                    output.push_str(&format!(
                        "\n\n  {} {}   {} {}   {} {}",
                        repository.stargazers_count.to_string().yellow().bold(),
                        locale.stars(),
                        repository.forks_count.to_string().yellow().bold(),
                        locale.forks(),
                        repository.open_issues.to_string().yellow().bold(),
                        locale.open_issues(),
                    ));

                    for issue in issues {
                        output.push_str(&format!("\n\n{}", issue_line(issue)));
                    }
                }
                ViewState::Failed(reason) => {
                    output.push_str(&format!("\n\n{}", reason.red()));
                }
            }

            output
        }
    }
}

fn issue_line(issue: &Issue) -> String {
    format!(
        "{} {}\n  {}\n  {}",
        format!("#{}", issue.number).cyan().bold(),
        issue.title.white().bold(),
        issue.user.login.dimmed(),
        issue.html_url.underline()
    )
}

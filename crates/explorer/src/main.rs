mod cli;
mod color;
mod commands;
mod config;
mod logging;
mod output;
mod storage;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use explorer_core::Route;
use github_backend::GitHubClient;
use output::output_error;
use std::process::ExitCode;
use storage::RepositoryStore;
use tracing::debug;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let ansi = color::init(cli.color);
    logging::init(cli.verbose, ansi);

    let format = cli.format;
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            output_error(&e, format);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    if let Commands::Completions { shell } = &cli.command {
        Cli::generate_completions(*shell);
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = Config::load(cli.config.as_deref())?;
    config.merge_with_cli(cli.api_url.clone(), cli.store.clone(), cli.locale.map(Into::into));
    debug!(api_url = config.api_url(), locale = ?config.locale, "configuration loaded");

    let locale = config.locale;
    let format = cli.format;

    match &cli.command {
        Commands::Add { identifier } => {
            let client = GitHubClient::with_base_url(config.api_url());
            let store = RepositoryStore::open(config.store_path()?);
            let identifier = identifier.as_deref().unwrap_or_default();
            commands::dashboard::handle_add(&client, store, identifier, locale, format)
        }
        Commands::List => {
            let store = RepositoryStore::open(config.store_path()?);
            commands::dashboard::handle_list(store, locale, format)
        }
        Commands::Show { identifier } => {
            let client = GitHubClient::with_base_url(config.api_url());
            commands::repository::handle_show(&client, identifier, locale, format)
        }
        Commands::Go { path } => match Route::parse(path)? {
            Route::Dashboard => {
                let store = RepositoryStore::open(config.store_path()?);
                commands::dashboard::handle_list(store, locale, format)
            }
            Route::Repository(identifier) => {
                let client = GitHubClient::with_base_url(config.api_url());
                commands::repository::handle_show(&client, &identifier, locale, format)
            }
        },
        Commands::Open {
            identifier,
            issue,
            print,
        } => {
            let client = GitHubClient::with_base_url(config.api_url());
            commands::repository::handle_open(&client, identifier, *issue, *print)
        }
        Commands::Config { action } => {
            commands::config::handle_config(&config, cli.config.as_deref(), action, format)
        }
        Commands::Completions { .. } => unreachable!("completions are handled before config loading"),
    }
}

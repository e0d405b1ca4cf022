use crate::cli::{ConfigCommands, OutputFormat};
use crate::config::{config_paths, Config};
use anyhow::Result;
use serde_json::json;
use std::path::Path;
use std::process::ExitCode;

pub fn handle_config(
    config: &Config,
    explicit_path: Option<&Path>,
    action: &ConfigCommands,
    format: OutputFormat,
) -> Result<ExitCode> {
    match action {
        ConfigCommands::Show => {
            let store_path = config.store_path()?;
            match format {
                OutputFormat::Json => {
                    let value = json!({
                        "api_url": config.api_url(),
                        "store_path": store_path,
                        "locale": config.locale,
                    });
                    println!("{}", serde_json::to_string_pretty(&value)?);
                }
                OutputFormat::Text => {
                    let effective = Config {
                        api_url: Some(config.api_url().to_string()),
                        store_path: Some(store_path),
                        locale: config.locale,
                    };
                    print!("{}", toml::to_string(&effective)?);
                }
            }
        }
        ConfigCommands::Path => {
            let store_path = config.store_path()?;
            let config_files: Vec<String> = config_paths(explicit_path)
                .iter()
                .map(|p| p.display().to_string())
                .collect();
            match format {
                OutputFormat::Json => {
                    let value = json!({
                        "config_files": config_files,
                        "store_path": store_path,
                    });
                    println!("{}", serde_json::to_string_pretty(&value)?);
                }
                OutputFormat::Text => {
                    for path in &config_files {
                        println!("config: {}", path);
                    }
                    println!("store:  {}", store_path.display());
                }
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

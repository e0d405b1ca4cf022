use anyhow::{anyhow, Context, Result};
use directories::{BaseDirs, ProjectDirs};
use explorer_core::Locale;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use github_backend::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_NAME: &str = "github-explorer";
const LOCAL_CONFIG_FILE_NAME: &str = ".explorer.toml";
const STORAGE_FILE_NAME: &str = "storage.json";

#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct Config {
    /// GitHub API base URL
    pub api_url: Option<String>,
    /// File backing the persistent key-value store
    pub store_path: Option<PathBuf>,
    #[serde(default)]
    pub locale: Locale,
}

impl Config {
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if let Some(path) = config_path {
            if !path.exists() {
                return Err(anyhow!("Config file not found: {}", path.display()));
            }
        }

        for path in config_paths(config_path) {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        figment
            .merge(Env::prefixed("EXPLORER_"))
            .extract()
            .context("Failed to load config")
    }

    pub fn merge_with_cli(
        &mut self,
        api_url: Option<String>,
        store_path: Option<PathBuf>,
        locale: Option<Locale>,
    ) {
        if let Some(url) = api_url {
            self.api_url = Some(url);
        }
        if let Some(path) = store_path {
            self.store_path = Some(path);
        }
        if let Some(locale) = locale {
            self.locale = locale;
        }
    }

    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Storage file location, defaulting to the platform data directory
    pub fn store_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.store_path {
            return Ok(path.clone());
        }

        ProjectDirs::from("", "", APP_NAME)
            .map(|d| d.data_dir().join(STORAGE_FILE_NAME))
            .ok_or_else(|| anyhow!("Could not determine a data directory; set --store"))
    }
}

/// Config files in merge order (later files win)
pub fn config_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(path) = explicit {
        paths.push(path.to_path_buf());
        return paths;
    }

    if let Some(path) = get_project_config_path() {
        push_unique(&mut paths, path);
    }
    if let Some(path) = get_xdg_config_path() {
        push_unique(&mut paths, path);
    }
    if let Some(path) = get_local_config_path() {
        push_unique(&mut paths, path);
    }

    paths
}

fn push_unique(paths: &mut Vec<PathBuf>, path: PathBuf) {
    if !paths.contains(&path) {
        paths.push(path);
    }
}

fn get_project_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|d| d.config_dir().join("config.toml"))
}

fn get_xdg_config_path() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(dir).join(APP_NAME).join("config.toml"));
    }

    BaseDirs::new().map(|dirs| {
        dirs.home_dir()
            .join(".config")
            .join(APP_NAME)
            .join("config.toml")
    })
}

fn get_local_config_path() -> Option<PathBuf> {
    std::env::current_dir()
        .ok()
        .map(|dir| dir.join(LOCAL_CONFIG_FILE_NAME))
}

//! # Assistente Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads the project configuration file `.assistente.toml`. The file is
//! optional; every setting has a default, and command-line arguments override it.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line arguments and the `PORT` environment variable (handled by the commands)
//! 2. `.assistente.toml` in the current directory or its ancestors (up to the repository root)
//! 3. Default values defined in the code
//!
//! Paths inside the file expand `~` and are resolved relative to the file's own directory,
//! so a project can be started from any subdirectory.
//!
//! ## Examples
//!
//! ```toml
//! [server]
//! port = 8080
//! host = "127.0.0.1"
//! enable_cors = false
//! static_dir = "public/static"
//! template_dir = "public"
//! index_file = "chat.html"
//!
//! [classifier]
//! categories = "~/tables/campus.toml"
//! ```
//!
//! ```rust
//! let cfg = config::load_config()?;
//! let table_path = cfg.classifier.categories.as_deref();
//! ```
//!
use crate::core::error::{AssistantError, Result};
use anyhow::{anyhow, Context};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Name of the project configuration file.
pub const CONFIG_FILE_NAME: &str = ".assistente.toml";

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub classifier: ClassifierSection,
}

/// Settings for `assistente srv`. Every field is optional so the file only needs
/// to mention what it overrides.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    pub port: Option<u16>,
    /// Kept as a string so an invalid address can fall back to the default with a warning.
    pub host: Option<String>,
    pub enable_cors: Option<bool>,
    /// Directory mounted at `/static`.
    pub static_dir: Option<PathBuf>,
    /// Directory holding the chat page.
    pub template_dir: Option<PathBuf>,
    pub index_file: Option<String>,
}

/// Settings shared by every command that classifies messages.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct ClassifierSection {
    /// Alternate category table. The built-in catalog is used when absent.
    pub categories: Option<PathBuf>,
}

/// Loads `.assistente.toml` from the current directory or the nearest ancestor.
/// Returns the defaults when no file is found.
pub fn load_config() -> Result<Config> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    match find_config_path(&current_dir) {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            load_config_from_path(&path)
        }
        None => {
            debug!("No {} found, using defaults.", CONFIG_FILE_NAME);
            Ok(Config::default())
        }
    }
}

/// Walks from `start` towards the filesystem root looking for the config file.
/// Stops at the first directory containing `.git`.
pub fn find_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let candidate = path.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

/// Reads and parses a config file, then resolves its paths against the file's directory.
pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))?;
    let base = path.parent().unwrap_or_else(|| Path::new("."));
    resolve_config_paths(&mut config, base)?;
    Ok(config)
}

fn resolve_config_paths(config: &mut Config, base: &Path) -> Result<()> {
    if let Some(dir) = config.server.static_dir.take() {
        config.server.static_dir = Some(resolve_path(&dir, base)?);
    }
    if let Some(dir) = config.server.template_dir.take() {
        config.server.template_dir = Some(resolve_path(&dir, base)?);
    }
    if let Some(table) = config.classifier.categories.take() {
        config.classifier.categories = Some(resolve_path(&table, base)?);
    }
    if let Some(index) = &config.server.index_file {
        if index.trim().is_empty() {
            return Err(anyhow!(AssistantError::Config(
                "index_file cannot be empty.".to_string()
            )));
        }
    }
    Ok(())
}

/// Expands `~` and joins relative paths onto `base`.
pub fn resolve_path(path: &Path, base: &Path) -> Result<PathBuf> {
    let raw = path.to_str().ok_or_else(|| {
        anyhow!(AssistantError::Config(format!(
            "Path is not valid UTF-8: {}",
            path.display()
        )))
    })?;
    let expanded = PathBuf::from(shellexpand::tilde(raw).into_owned());
    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        Ok(base.join(expanded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_deserialize_full_toml() {
        let toml_content = r#"
            [server]
            port = 8080
            host = "127.0.0.1"
            enable_cors = false
            static_dir = "public/static"
            index_file = "chat.html"

            [classifier]
            categories = "tables/campus.toml"
        "#;

        let config: Config = toml::from_str(toml_content).expect("Failed to parse TOML");

        assert_eq!(config.server.port, Some(8080));
        assert_eq!(config.server.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(config.server.enable_cors, Some(false));
        assert_eq!(config.server.template_dir, None);
        assert_eq!(config.server.index_file.as_deref(), Some("chat.html"));
        assert_eq!(
            config.classifier.categories,
            Some(PathBuf::from("tables/campus.toml"))
        );
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str("[server]\nportt = 1\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_paths_resolved_against_config_dir() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            "[server]\nstatic_dir = \"assets\"\n[classifier]\ncategories = \"/abs/table.toml\"\n",
        )
        .unwrap();

        let config = load_config_from_path(&path).unwrap();

        assert_eq!(
            config.server.static_dir,
            Some(temp_dir.path().join("assets"))
        );
        assert_eq!(
            config.classifier.categories,
            Some(PathBuf::from("/abs/table.toml"))
        );
    }

    #[test]
    fn test_tilde_expansion() {
        let resolved = resolve_path(Path::new("~/tables/a.toml"), Path::new("/base")).unwrap();
        assert!(!resolved.to_string_lossy().starts_with('~'));
        assert!(resolved.ends_with("tables/a.toml"));
    }

    #[test]
    fn test_empty_index_file_rejected() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[server]\nindex_file = \"  \"\n").unwrap();

        let result = load_config_from_path(&path);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("index_file cannot be empty"));
    }

    #[test]
    fn test_find_config_path_in_ancestor() {
        let temp_dir = tempdir().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "").unwrap();

        let found = find_config_path(&nested);
        assert_eq!(found, Some(temp_dir.path().join(CONFIG_FILE_NAME)));
    }

    #[test]
    fn test_find_config_path_stops_at_git_root() {
        let temp_dir = tempdir().unwrap();
        let repo = temp_dir.path().join("repo");
        fs::create_dir_all(repo.join(".git")).unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "").unwrap();

        assert_eq!(find_config_path(&repo), None);
    }
}

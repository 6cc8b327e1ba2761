//! # Assistente Chat Server Configuration
//!
//! File: cli/src/commands/srv/config.rs
//!
//! ## Overview
//!
//! This module builds the effective configuration of the chat server. It combines:
//! 1. Command-line arguments and the `PORT` environment variable (highest priority)
//! 2. The `[server]` and `[classifier]` sections of `.assistente.toml` (if present)
//! 3. Default values (lowest priority)
//!
//! ## Architecture
//!
//! Every CLI option is optional, so "not given" is distinguishable from "given the
//! default value" and precedence is a plain `args.or(file).unwrap_or(default)` per field.
//! Relative directories are made absolute against the current working directory.
//! A missing static or template directory is only a warning: the chat endpoint
//! still works without the web page.
//!
//! ## Examples
//!
//! ```rust
//! let args = SrvArgs::parse();
//! let config = load_and_merge_config(args).await?;
//! println!("Listening on: {}:{}", config.host, config.port);
//! ```
//!
use crate::core::config::{self, ClassifierSection, ServerSection};
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::net::{IpAddr, Ipv4Addr};
use std::{env, path::PathBuf};
use tracing::{debug, warn};

/// # Server Command Arguments (`SrvArgs`)
///
/// Command-line arguments accepted by `assistente srv`. Anything left out falls back
/// to `.assistente.toml` and then to the built-in defaults.
#[derive(Parser, Debug, Default)]
pub struct SrvArgs {
    /// Port to listen on (default 5000). Also read from the PORT environment variable.
    #[arg(long, short, env = "PORT")]
    pub port: Option<u16>,

    /// Address to bind (default 0.0.0.0, all interfaces).
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// Disables Cross-Origin Resource Sharing (CORS) headers.
    #[arg(long)]
    pub no_cors: bool,

    /// Directory served under `/static` (default `static`).
    #[arg(long, value_name = "DIR")]
    pub static_dir: Option<PathBuf>,

    /// Directory holding the chat page (default `templates`).
    #[arg(long, value_name = "DIR")]
    pub template_dir: Option<PathBuf>,

    /// File inside the template directory served at `/` (default `index.html`).
    #[arg(long, short)]
    pub index: Option<String>,

    /// Category table (TOML) to use instead of the built-in catalog.
    #[arg(long, value_name = "FILE")]
    pub categories: Option<PathBuf>,
}

/// # Effective Server Configuration (`ServerConfig`)
///
/// The consolidated settings the server logic runs with.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: IpAddr,
    pub enable_cors: bool,
    pub static_dir: PathBuf,
    pub template_dir: PathBuf,
    pub index_file: String,
    /// `None` selects the built-in catalog.
    pub categories: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            enable_cors: true,
            static_dir: PathBuf::from("static"),
            template_dir: PathBuf::from("templates"),
            index_file: "index.html".to_string(),
            categories: None,
        }
    }
}

/// # Load and Merge Server Configuration (`load_and_merge_config`)
///
/// Loads `.assistente.toml` (if any), merges it with `args`, and makes the
/// directories absolute.
///
/// ## Errors
///
/// Returns an error if the config file exists but cannot be read or parsed, or if
/// the current working directory cannot be determined.
pub async fn load_and_merge_config(args: SrvArgs) -> Result<ServerConfig> {
    let file = config::load_config()?;
    let mut effective = merge_config(args, &file.server, &file.classifier);
    effective.resolve_directories()?;
    Ok(effective)
}

/// Applies CLI > file > default precedence field by field.
pub fn merge_config(
    args: SrvArgs,
    file: &ServerSection,
    classifier: &ClassifierSection,
) -> ServerConfig {
    let defaults = ServerConfig::default();

    let file_host = file.host.as_ref().and_then(|host_str| match host_str.parse() {
        Ok(ip) => Some(ip),
        Err(e) => {
            warn!(
                "Invalid host IP '{}' in config file ({}), using default {}",
                host_str, e, defaults.host
            );
            None
        }
    });

    ServerConfig {
        port: args.port.or(file.port).unwrap_or(defaults.port),
        host: args.host.or(file_host).unwrap_or(defaults.host),
        // --no-cors always wins; otherwise the file decides.
        enable_cors: !args.no_cors && file.enable_cors.unwrap_or(defaults.enable_cors),
        static_dir: args
            .static_dir
            .or_else(|| file.static_dir.clone())
            .unwrap_or(defaults.static_dir),
        template_dir: args
            .template_dir
            .or_else(|| file.template_dir.clone())
            .unwrap_or(defaults.template_dir),
        index_file: args
            .index
            .or_else(|| file.index_file.clone())
            .unwrap_or(defaults.index_file),
        categories: args.categories.or_else(|| classifier.categories.clone()),
    }
}

impl ServerConfig {
    /// Makes `static_dir` and `template_dir` absolute and warns when they are missing.
    fn resolve_directories(&mut self) -> Result<()> {
        let current_dir = env::current_dir().context("Failed to get current working directory")?;
        for (label, dir) in [
            ("static", &mut self.static_dir),
            ("template", &mut self.template_dir),
        ] {
            if dir.is_relative() {
                *dir = current_dir.join(&*dir);
            }
            if !dir.is_dir() {
                warn!(
                    "The {} directory '{}' does not exist; requests for it will return 404.",
                    label,
                    dir.display()
                );
            } else {
                debug!("Resolved {} directory to: {}", label, dir.display());
            }
        }
        Ok(())
    }

    /// Full path of the page served at `/`.
    pub fn index_path(&self) -> PathBuf {
        self.template_dir.join(&self.index_file)
    }
}

// --- Unit Tests ---

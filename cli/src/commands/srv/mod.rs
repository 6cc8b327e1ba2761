//! # Assistente Chat Server
//!
//! File: cli/src/commands/srv/mod.rs
//!
//! ## Overview
//!
//! `assistente srv` runs the chat web application:
//! - `POST /chat` classifies `{"mensagem": ...}` and answers `{"categoria", "resposta"}`
//! - `GET /` serves the chat page, `/static/*` its assets
//! - CORS (on by default, credentials allowed)
//! - Port binding with automatic fallback if the port is in use
//!
//! ## Architecture
//!
//! - `config.rs`: argument, file and default merging
//! - `handlers.rs`: the request handlers and shared state
//! - `server_logic.rs`: router assembly, port selection and the serve loop
//!
//! ## Examples
//!
//! ```bash
//! # Serve on 0.0.0.0:5000 with the built-in categories
//! assistente srv
//!
//! # Another port (PORT=8080 works too) with CORS disabled
//! assistente srv --port 8080 --no-cors
//!
//! # Serve an alternate category table
//! assistente srv --categories ./campus.toml
//! ```
//!
use crate::core::error::Result;
use tracing::info;

pub use config::SrvArgs;

/// Configuration loading and merging for the chat server.
pub mod config;

/// Handlers for `/chat` and `/`.
pub mod handlers;

/// Axum router, port fallback and graceful shutdown.
pub mod server_logic;

/// # Handle Server Command (`handle_srv`)
///
/// Entry point for `assistente srv`: resolves the effective configuration and
/// hands it to [`server_logic::run_server`], which blocks until shutdown.
pub async fn handle_srv(args: SrvArgs) -> Result<()> {
    info!("Handling srv command with args: {:?}", args);

    let config = config::load_and_merge_config(args).await?;
    info!("Effective server config: {:?}", config);

    server_logic::run_server(config).await?;

    Ok(())
}

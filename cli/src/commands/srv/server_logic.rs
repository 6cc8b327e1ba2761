//! # Assistente HTTP Server Implementation
//!
//! File: cli/src/commands/srv/server_logic.rs
//!
//! ## Overview
//!
//! This module implements the HTTP side of `assistente srv`:
//! - `POST /chat` classification endpoint
//! - `GET /` chat page and `/static` assets
//! - Port availability checking with automatic fallback
//! - CORS configuration
//! - Graceful shutdown handling
//!
//! ## Architecture
//!
//! The server implementation uses Axum and follows these steps:
//! 1. Build the classifier once (built-in catalog or configured table)
//! 2. Find an available port if the requested one is in use
//! 3. Set up the Axum router with the classifier as shared state
//! 4. Serve until Ctrl+C or SIGTERM
//!
//! The category table is validated before any port is bound, so a broken table
//! fails the command immediately.
//!
use super::config::ServerConfig;
use super::handlers::{self, AppState};
use crate::classifier::Classifier;
use crate::core::error::Result;
use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};

use tracing::{error, info, warn, Level};

/// # Run HTTP Server (`run_server`)
///
/// Builds the classifier, binds to the first free port starting at `config.port`,
/// and serves the chat application until a shutdown signal arrives.
///
/// ## Errors
///
/// - The configured category table cannot be read or fails validation.
/// - No free port is found within the allowed attempts.
/// - Binding the listener or running the server fails.
pub async fn run_server(config: ServerConfig) -> Result<()> {
    let classifier = Classifier::from_source(config.categories.as_deref())
        .context("Failed to build the category table")?;
    info!(
        "Loaded {} categories (fallback '{}').",
        classifier.table().len(),
        classifier.table().fallback().key()
    );

    let max_port_attempts = 10;
    let addr = find_available_port(config.host, config.port, max_port_attempts).await?;

    let app = create_app(&config, Arc::new(classifier));

    println!("\n=================================================================");
    println!("💬 Chat endpoint:     http://localhost:{}/chat", addr.port());
    println!("🌐 Chat page:         http://localhost:{}/", addr.port());
    println!("⚙️  Binding to address: {}", addr);
    println!("📄 Index file:        {}", config.index_path().display());
    println!("📂 Static files:      {}", config.static_dir.display());
    println!("🔒 CORS enabled:      {}", config.enable_cors);
    println!("=================================================================\n");

    info!("Starting chat server on {}", addr);
    println!("Server starting! Press Ctrl+C to stop.");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind TCP listener to address {}", addr))?;

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    println!("\nServer shutdown complete.");
    Ok(())
}

/// # Handle Shutdown Signal (`shutdown_signal`)
///
/// Resolves when Ctrl+C (or SIGTERM on Unix) is received, letting `axum::serve`
/// finish in-flight requests before exiting.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, initiating graceful shutdown...");
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received SIGTERM, initiating graceful shutdown...");
            }
            Err(e) => {
                error!(
                    "Failed to install SIGTERM handler: {}. Shutdown on SIGTERM might not work.",
                    e
                );
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// # Find Available Port (`find_available_port`)
///
/// Tries `start_port` and then the following ports, up to `max_attempts` in total,
/// returning the first address that can be bound.
async fn find_available_port(
    req_host: std::net::IpAddr,
    start_port: u16,
    max_attempts: u8,
) -> Result<SocketAddr> {
    let mut current_port = start_port;

    for attempt in 0..max_attempts {
        let addr = SocketAddr::new(req_host, current_port);

        match TcpListener::bind(addr).await {
            Ok(listener) => {
                drop(listener);
                if attempt > 0 {
                    info!(
                        "Port {} was unavailable, successfully bound to available port {}.",
                        start_port, current_port
                    );
                }
                return Ok(addr);
            }
            Err(e) => {
                warn!(
                    "Attempt {}: Port {} on host {} is unavailable (Error: {}). Trying next port...",
                    attempt + 1,
                    current_port,
                    req_host,
                    e
                );
                current_port = match current_port.checked_add(1) {
                    Some(port) => port,
                    None => break,
                };
            }
        }
    }

    anyhow::bail!(
        "Could not find an available port on host {} starting from port {} after trying {} ports.",
        req_host,
        start_port,
        max_attempts
    )
}

/// # Create Axum Application (`create_app`)
///
/// Routes `/chat`, `/` and `/static`, with request tracing and (optionally)
/// credential-aware permissive CORS.
pub fn create_app(config: &ServerConfig, classifier: Arc<Classifier>) -> Router {
    let cors_layer = if config.enable_cors {
        info!("CORS middleware enabled (permissive, credentials allowed).");
        CorsLayer::very_permissive()
    } else {
        info!("CORS middleware disabled.");
        CorsLayer::new()
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::default().include_headers(true))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let state = AppState {
        classifier,
        index_path: Arc::new(config.index_path()),
    };

    Router::new()
        .route("/", get(handlers::index))
        .route("/chat", post(handlers::chat))
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(cors_layer),
        )
}

// --- Unit Tests ---

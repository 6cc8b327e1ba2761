//! # Assistente Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! Entry point of the `assistente` CLI, the rule-based virtual assistant of the
//! Senac Serra website. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the command handlers
//!
//! ## Architecture
//!
//! - `classifier`: normalization, pattern scoring and response selection
//! - `commands`: `srv`, `ask` and `categories`
//! - `core`: errors and `.assistente.toml` configuration
//!
//! All errors propagate up to `main`, which prints them and exits with status 1.
//!
//! ## Examples
//!
//! ```bash
//! assistente --help
//! assistente ask "Quanto custa o curso?"
//! assistente -vv srv --port 8080
//! ```
//!
use crate::core::error::AssistantError;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod classifier; // Intent classification engine
mod commands; // Command handlers (srv, ask, categories)
mod core; // Errors and configuration

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "assistente",
    about = "💬 Assistente Senac Serra: rule-based virtual assistant",
    long_about = "Classifies visitor questions into intent categories and answers with canned responses.\n\
                  Runs the chat web server or answers single questions from the terminal.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// All available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Run the chat web server.
    #[command(alias = "s")]
    Srv(commands::srv::SrvArgs),
    /// Classify one message and print the reply.
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    /// Validate and list the category table.
    #[command(alias = "c")]
    Categories(commands::categories::CategoriesArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Srv(args) => commands::srv::handle_srv(args).await,
        Commands::Ask(args) => commands::ask::handle_ask(args).await,
        Commands::Categories(args) => commands::categories::handle_categories(args).await,
    };

    if let Err(e) = command_result {
        // An empty message is a rejected input, not a failure of the program.
        if matches!(
            e.downcast_ref::<AssistantError>(),
            Some(AssistantError::EmptyInput)
        ) {
            tracing::debug!("Rejected empty message: {}", e);
        } else {
            tracing::error!("Command execution failed: {:?}", e);
        }
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

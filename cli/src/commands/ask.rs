//! # Assistente Ask Command
//!
//! File: cli/src/commands/ask.rs
//!
//! ## Overview
//!
//! `assistente ask` classifies one message from the command line and prints the
//! answer. It goes through the same boundary check as the HTTP endpoint, so an
//! empty or whitespace-only message fails with `Mensagem vazia.`.
//!
//! ## Examples
//!
//! ```bash
//! # Plain output: "<category>: <response>"
//! assistente ask "Quanto custa o curso?"
//!
//! # JSON, exactly as POST /chat would return it
//! assistente ask --json Oi, bom dia!
//!
//! # Reproducible response choice and an alternate table
//! assistente ask --seed 7 --categories ./campus.toml "tem biblioteca?"
//! ```
//!
use crate::classifier::{require_message, Classifier};
use crate::core::config;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use std::path::PathBuf;
use tracing::{debug, info};

/// Arguments for `assistente ask`.
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The message to classify. Multiple words are joined with single spaces.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub message: Vec<String>,

    /// Print the reply as JSON (`{"categoria": ..., "resposta": ...}`).
    #[arg(long)]
    pub json: bool,

    /// Seed the response picker for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Category table (TOML) to use instead of the built-in catalog.
    #[arg(long, value_name = "FILE")]
    pub categories: Option<PathBuf>,
}

pub async fn handle_ask(args: AskArgs) -> Result<()> {
    info!("Handling ask command");
    let raw = args.message.join(" ");
    let message = require_message(&raw)?;

    let cfg = config::load_config()?;
    let table_path = args.categories.or(cfg.classifier.categories);
    let classifier = Classifier::from_source(table_path.as_deref())?;
    debug!("Classifying message: {:?}", message);

    let reply = match args.seed {
        Some(seed) => classifier.classify_with(message, &mut StdRng::seed_from_u64(seed)),
        None => classifier.classify(message),
    };

    if args.json {
        let json = serde_json::to_string(&reply).context("Failed to encode reply as JSON")?;
        println!("{}", json);
    } else {
        println!("{}: {}", reply.category, reply.response);
    }
    Ok(())
}

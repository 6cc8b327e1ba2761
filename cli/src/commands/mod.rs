//! # Assistente Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! Top-level commands of the `assistente` CLI. Each module defines its own
//! argument struct and an async `handle_*` function called from `main.rs`.
//!
//! ## Command Groups
//!
//! - `ask`: classify one message from the command line
//! - `categories`: validate and list a category table
//! - `srv`: run the chat HTTP server
//!

/// Classifies a single message and prints the reply.
pub mod ask;
/// Lists the categories of the built-in or a configured table.
pub mod categories;
/// The chat web server. Includes configuration, handlers and server logic.
pub mod srv;

//! # Assistente Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure components shared by the
//! command handlers: configuration loading and the error types.
//!
//! ## Architecture
//!
//! - `config`: Layered `.assistente.toml` loading, merging, and path resolution
//! - `error`: Error types and error handling utilities
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{AssistantError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;

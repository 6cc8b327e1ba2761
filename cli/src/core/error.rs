//! # Assistente Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types and error handling mechanisms used throughout
//! the Assistente application. It provides a consistent approach to error management
//! with detailed error information and context.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `AssistantError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types cover:
//! - Configuration errors
//! - Category table construction errors (bad regex, duplicate keys, missing fallback)
//! - The `EmptyInput` rejection raised at the transport boundary
//!
//! ## Examples
//!
//! ```rust
//! // Reject an empty message before it reaches the classifier
//! let message = raw.trim();
//! if message.is_empty() {
//!     return Err(AssistantError::EmptyInput)?;
//! }
//!
//! // Detect the rejection further up
//! match result {
//!     Err(e) if e.downcast_ref::<AssistantError>().map_or(false, |ae| matches!(ae, AssistantError::EmptyInput)) => {
//!         println!("nothing to classify");
//!     },
//!     other => other?,
//! }
//! ```
//!
//! The classifier itself never returns an error at request time; everything here is
//! raised either while building a category table or at the edges (CLI, HTTP, config).
//!
use thiserror::Error;

/// User-facing text attached to an `EmptyInput` rejection.
pub const EMPTY_MESSAGE_TEXT: &str = "Mensagem vazia.";

/// Custom error type for the Assistente application.
#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// The trimmed message was empty. Raised by the transport layer, never by the classifier.
    #[error("{}", EMPTY_MESSAGE_TEXT)]
    EmptyInput,

    #[error("Invalid pattern in category '{category}': {source}")]
    InvalidPattern {
        category: String,
        #[source]
        source: regex::Error,
    },

    #[error("Category '{key}' is defined more than once.")]
    DuplicateCategory { key: String },

    #[error("Category table has no fallback category.")]
    MissingFallback,

    #[error("Category table declares more than one fallback ('{first}' and '{second}').")]
    MultipleFallbacks { first: String, second: String },

    #[error("Category '{key}' is invalid: {reason}")]
    InvalidCategory { key: String, reason: String },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_err = AssistantError::Config("Missing setting 'port'".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: Missing setting 'port'"
        );

        assert_eq!(AssistantError::EmptyInput.to_string(), "Mensagem vazia.");

        let duplicate = AssistantError::DuplicateCategory {
            key: "saudacao".into(),
        };
        assert_eq!(
            duplicate.to_string(),
            "Category 'saudacao' is defined more than once."
        );

        let invalid = AssistantError::InvalidCategory {
            key: "moda".into(),
            reason: "no responses".into(),
        };
        assert_eq!(invalid.to_string(), "Category 'moda' is invalid: no responses");
    }

    #[test]
    fn test_invalid_pattern_keeps_source() {
        let source = regex::Regex::new("(unclosed").unwrap_err();
        let err = AssistantError::InvalidPattern {
            category: "broken".into(),
            source,
        };
        assert!(err.to_string().starts_with("Invalid pattern in category 'broken'"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_empty_input_downcasts_through_anyhow() {
        let err: anyhow::Error = AssistantError::EmptyInput.into();
        assert!(matches!(
            err.downcast_ref::<AssistantError>(),
            Some(AssistantError::EmptyInput)
        ));
    }
}

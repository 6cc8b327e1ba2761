//! # Intent Classifier
//!
//! File: cli/src/classifier/mod.rs
//!
//! ## Overview
//!
//! Turns a free-text message into an intent category and a canned response:
//! 1. `normalize`: lowercase and strip diacritics
//! 2. `matcher`: score each category's patterns, pick the best (first wins ties)
//! 3. `select`: pick one of the winner's responses at random
//!
//! ## Architecture
//!
//! - `catalog`: the built-in Senac Serra categories
//! - `table`: validated, immutable category table (built-in or loaded from TOML)
//! - `pattern`: compiled regex plus precomputed trigger words
//! - `matcher`, `normalize`, `select`: the three steps above
//!
//! A `Classifier` owns its table and never mutates it, so one instance can be
//! shared behind an `Arc` by every request handler without locking.
//!
//! ## Examples
//!
//! ```rust
//! let classifier = Classifier::builtin()?;
//! let message = require_message("  Oi, bom dia! ")?;
//! let reply = classifier.classify(message);
//! assert_eq!(reply.category, "saudacao");
//! ```
//!
pub mod catalog;
pub mod matcher;
pub mod normalize;
pub mod pattern;
pub mod select;
pub mod table;

use crate::core::error::{AssistantError, Result};
use rand::Rng;
use serde::Serialize;
use std::path::Path;
use tracing::debug;

pub use table::CategoryTable;

/// Outcome of classifying one message. Serializes to the chat wire format
/// `{"categoria": ..., "resposta": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "resposta")]
    pub response: String,
    /// Winning score; zero for the fallback.
    #[serde(skip)]
    pub score: u32,
}

/// Immutable classifier over one category table.
#[derive(Debug, Clone)]
pub struct Classifier {
    table: CategoryTable,
}

impl Classifier {
    pub fn new(table: CategoryTable) -> Self {
        Self { table }
    }

    /// Classifier over the built-in catalog.
    pub fn builtin() -> std::result::Result<Self, AssistantError> {
        Ok(Self::new(catalog::builtin_table()?))
    }

    /// Uses the table at `path` when given, the built-in catalog otherwise.
    pub fn from_source(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Ok(Self::new(CategoryTable::load(path)?)),
            None => {
                debug!("Using built-in category catalog.");
                Ok(Self::builtin()?)
            }
        }
    }

    pub fn table(&self) -> &CategoryTable {
        &self.table
    }

    /// Classifies a non-empty, trimmed message using the thread-local RNG.
    pub fn classify(&self, message: &str) -> Classification {
        self.classify_with(message, &mut rand::thread_rng())
    }

    /// Classifies with an explicit random source.
    pub fn classify_with<R: Rng + ?Sized>(&self, message: &str, rng: &mut R) -> Classification {
        let normalized = normalize::normalize(message);
        let best = matcher::best_category(&self.table, &normalized);
        let response = select::select_response(best.category, rng);
        debug!(
            "Classified message as '{}' (score {})",
            best.category.key(),
            best.score
        );
        Classification {
            category: best.category.key().to_string(),
            response: response.to_string(),
            score: best.score,
        }
    }
}

/// Boundary check shared by the CLI and HTTP front ends: trims `raw` and rejects
/// empty or whitespace-only messages before they reach the classifier.
pub fn require_message(raw: &str) -> std::result::Result<&str, AssistantError> {
    let message = raw.trim();
    if message.is_empty() {
        Err(AssistantError::EmptyInput)
    } else {
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::fs;
    use tempfile::tempdir;

    fn responses_of<'c>(classifier: &'c Classifier, key: &str) -> &'c [String] {
        classifier.table().get(key).unwrap().responses()
    }

    #[test]
    fn test_greeting_scenario() {
        let classifier = Classifier::builtin().unwrap();
        let reply = classifier.classify("Oi, bom dia!");
        assert_eq!(reply.category, "saudacao");
        assert!(responses_of(&classifier, "saudacao").contains(&reply.response));
    }

    #[test]
    fn test_price_scenario_is_deterministic() {
        let classifier = Classifier::builtin().unwrap();
        let expected = responses_of(&classifier, "valores_pagamento")[0].clone();
        for _ in 0..5 {
            let reply = classifier.classify("Quanto custa o curso?");
            assert_eq!(reply.category, "valores_pagamento");
            assert_eq!(reply.response, expected);
        }
    }

    #[test]
    fn test_whitespace_is_rejected_before_classification() {
        assert!(matches!(require_message("   "), Err(AssistantError::EmptyInput)));
        assert!(matches!(require_message(""), Err(AssistantError::EmptyInput)));
        assert!(matches!(require_message("\n\t"), Err(AssistantError::EmptyInput)));
        assert_eq!(require_message("  oi  ").unwrap(), "oi");
    }

    #[test]
    fn test_nonsense_scenario_uses_fallback() {
        let classifier = Classifier::builtin().unwrap();
        for _ in 0..20 {
            let reply = classifier.classify("xyzabc123 nonsense");
            assert_eq!(reply.category, "padrao");
            assert_eq!(reply.score, 0);
            assert!(!reply.response.is_empty());
            assert!(responses_of(&classifier, "padrao").contains(&reply.response));
        }
    }

    #[test]
    fn test_seeded_classification_is_reproducible() {
        let classifier = Classifier::builtin().unwrap();
        let mut a = StdRng::seed_from_u64(3);
        let mut b = StdRng::seed_from_u64(3);
        for _ in 0..10 {
            assert_eq!(
                classifier.classify_with("Olá", &mut a),
                classifier.classify_with("Olá", &mut b)
            );
        }
    }

    #[test]
    fn test_serializes_to_wire_format() {
        let reply = Classification {
            category: "moda".into(),
            response: "texto".into(),
            score: 3,
        };
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json, serde_json::json!({"categoria": "moda", "resposta": "texto"}));
    }

    #[test]
    fn test_from_source_loads_alternate_table() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("campus.toml");
        fs::write(
            &path,
            r#"
            [[category]]
            key = "biblioteca"
            patterns = ['\b(livro|livros)\b']
            responses = ["A biblioteca abre às 8h."]

            [[category]]
            key = "outro"
            fallback = true
            responses = ["Pode repetir?"]
            "#,
        )
        .unwrap();

        let classifier = Classifier::from_source(Some(&path)).unwrap();
        assert_eq!(classifier.classify("Tem livros?").category, "biblioteca");
        assert_eq!(classifier.classify("Oi, bom dia!").category, "outro");
    }

    #[test]
    fn test_from_source_defaults_to_builtin() {
        let classifier = Classifier::from_source(None).unwrap();
        assert!(classifier.table().get("saudacao").is_some());
    }

    #[test]
    fn test_shared_across_threads() {
        let classifier = std::sync::Arc::new(Classifier::builtin().unwrap());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let classifier = classifier.clone();
                std::thread::spawn(move || classifier.classify("Onde fica o Senac?").category)
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "localizacao");
        }
    }
}

//! # Pattern Rules
//!
//! File: cli/src/classifier/pattern.rs
//!
//! ## Overview
//!
//! A `Pattern` pairs a compiled, case-insensitive regular expression with the literal
//! trigger words found in its source text. The trigger words are extracted once, when
//! the category table is built, and reused for every message.
//!
//! ## Scoring
//!
//! When the regex matches anywhere in a normalized message, each trigger word that
//! also occurs as a substring of the message adds one point. Words are runs of
//! `[a-z0-9]` bounded by word boundaries in the *pattern source*, so regex syntax
//! leaks in: the `b` of a leading `\b` is a trigger word, and `n[uú]mero` yields
//! `n` and `mero`. Duplicates are kept. This mirrors the behaviour the response
//! catalog was tuned against and must not be "fixed" without retuning it.
//!
use crate::core::error::AssistantError;
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

static TRIGGER_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([a-z0-9]+)\b").expect("trigger word regex is valid"));

/// A single matching rule belonging to a category.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    trigger_words: Vec<String>,
}

impl Pattern {
    /// Compiles `source` case-insensitively and extracts its trigger words.
    ///
    /// `category` is only used to label the error when the source is not a valid regex.
    pub fn new(category: &str, source: &str) -> Result<Self, AssistantError> {
        let regex = RegexBuilder::new(source)
            .case_insensitive(true)
            .build()
            .map_err(|source| AssistantError::InvalidPattern {
                category: category.to_string(),
                source,
            })?;
        Ok(Self {
            regex,
            trigger_words: extract_trigger_words(source),
        })
    }

    /// The pattern text as written in the table.
    pub fn source(&self) -> &str {
        self.regex.as_str()
    }

    pub fn trigger_words(&self) -> &[String] {
        &self.trigger_words
    }

    /// Regex search (not a full match) against an already normalized message.
    pub fn is_match(&self, normalized: &str) -> bool {
        self.regex.is_match(normalized)
    }

    /// Points this pattern contributes for `normalized`; zero when the regex does not match.
    pub fn score(&self, normalized: &str) -> u32 {
        if !self.is_match(normalized) {
            return 0;
        }
        self.trigger_words
            .iter()
            .filter(|word| normalized.contains(word.as_str()))
            .count() as u32
    }
}

fn extract_trigger_words(source: &str) -> Vec<String> {
    TRIGGER_WORD
        .find_iter(source)
        .map(|m| m.as_str().to_string())
        .collect()
}

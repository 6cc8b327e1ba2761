//! # Category Table
//!
//! File: cli/src/classifier/table.rs
//!
//! ## Overview
//!
//! The category table is the immutable rule set the matcher scores against. It is
//! built once (from the built-in catalog or from a TOML file), validated, and then
//! shared read-only between requests.
//!
//! ## Invariants
//!
//! Enforced by `CategoryTable::from_definitions`:
//! - category keys are non-empty and unique
//! - exactly one category is the fallback; it has no patterns
//! - every other category has at least one pattern
//! - every category has at least one non-empty response
//! - every pattern compiles
//!
//! ## File Format
//!
//! ```toml
//! [[category]]
//! key = "saudacao"
//! patterns = ['\b(oi|ola)\b']
//! responses = ["Olá! Como posso ajudar?"]
//!
//! [[category]]
//! key = "padrao"
//! fallback = true
//! responses = ["Não entendi. Pode reformular?"]
//! ```
//!
use super::pattern::Pattern;
use crate::core::error::{AssistantError, Result};
use anyhow::Context;
use serde::Deserialize;
use std::{collections::HashMap, fs, path::Path};
use tracing::{debug, info};

/// Raw category as written in a table file or the built-in catalog.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CategoryDef {
    pub key: String,
    #[serde(default)]
    pub patterns: Vec<String>,
    pub responses: Vec<String>,
    #[serde(default)]
    pub fallback: bool,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct TableFile {
    #[serde(rename = "category", default)]
    categories: Vec<CategoryDef>,
}

/// A validated intent bucket.
#[derive(Debug, Clone)]
pub struct Category {
    key: String,
    patterns: Vec<Pattern>,
    responses: Vec<String>,
}

impl Category {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Never empty.
    pub fn responses(&self) -> &[String] {
        &self.responses
    }
}

/// Ordered, validated set of categories with exactly one fallback.
#[derive(Debug, Clone)]
pub struct CategoryTable {
    categories: Vec<Category>,
    index: HashMap<String, usize>,
    fallback: usize,
}

impl CategoryTable {
    /// Builds and validates a table. Definition order is kept; it decides ties.
    pub fn from_definitions(
        definitions: Vec<CategoryDef>,
    ) -> std::result::Result<Self, AssistantError> {
        let mut categories = Vec::with_capacity(definitions.len());
        let mut index = HashMap::with_capacity(definitions.len());
        let mut fallback: Option<usize> = None;

        for def in definitions {
            validate_definition(&def)?;

            if index.contains_key(&def.key) {
                return Err(AssistantError::DuplicateCategory { key: def.key });
            }

            if def.fallback {
                if let Some(first) = fallback {
                    let first: &Category = &categories[first];
                    return Err(AssistantError::MultipleFallbacks {
                        first: first.key.clone(),
                        second: def.key,
                    });
                }
                fallback = Some(categories.len());
            }

            let patterns = def
                .patterns
                .iter()
                .map(|source| Pattern::new(&def.key, source))
                .collect::<std::result::Result<Vec<_>, _>>()?;

            index.insert(def.key.clone(), categories.len());
            categories.push(Category {
                key: def.key,
                patterns,
                responses: def.responses,
            });
        }

        let fallback = fallback.ok_or(AssistantError::MissingFallback)?;
        debug!(
            "Built category table with {} categories (fallback '{}').",
            categories.len(),
            categories[fallback].key
        );
        Ok(Self {
            categories,
            index,
            fallback,
        })
    }

    /// Parses a TOML table file (see the module docs for the format).
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: TableFile =
            toml::from_str(content).context("Failed to parse category table")?;
        Ok(Self::from_definitions(file.categories)?)
    }

    /// Reads and validates a table file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading category table from: {}", path.display());
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read category table: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid category table: {}", path.display()))
    }

    pub fn get(&self, key: &str) -> Option<&Category> {
        self.index.get(key).map(|&i| &self.categories[i])
    }

    pub fn fallback(&self) -> &Category {
        &self.categories[self.fallback]
    }

    /// All categories in definition order, fallback included.
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Categories that take part in scoring, in definition order.
    pub fn scored(&self) -> impl Iterator<Item = &Category> {
        let fallback = self.fallback;
        self.categories
            .iter()
            .enumerate()
            .filter(move |(i, _)| *i != fallback)
            .map(|(_, category)| category)
    }

    pub fn is_fallback(&self, category: &Category) -> bool {
        category.key == self.fallback().key
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }
}

fn validate_definition(def: &CategoryDef) -> std::result::Result<(), AssistantError> {
    let invalid = |reason: &str| AssistantError::InvalidCategory {
        key: def.key.clone(),
        reason: reason.to_string(),
    };

    if def.key.trim().is_empty() {
        return Err(invalid("key cannot be empty"));
    }
    if def.responses.is_empty() {
        return Err(invalid("at least one response is required"));
    }
    if def.responses.iter().any(|r| r.trim().is_empty()) {
        return Err(invalid("responses cannot be empty strings"));
    }
    if def.fallback && !def.patterns.is_empty() {
        return Err(invalid("the fallback category cannot have patterns"));
    }
    if !def.fallback && def.patterns.is_empty() {
        return Err(invalid("at least one pattern is required"));
    }
    Ok(())
}

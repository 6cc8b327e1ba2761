//! # Assistente Categories Command
//!
//! File: cli/src/commands/categories.rs
//!
//! ## Overview
//!
//! `assistente categories` validates a category table and prints it in scoring
//! order, one line per category with its pattern and response counts. Given a
//! category key, it prints that category in detail instead: every pattern with
//! the trigger words it scores with, and every response. Useful for checking an
//! alternate table before pointing the server at it, or for working out why a
//! message landed where it did.
//!
//! ```bash
//! assistente categories
//! assistente categories saudacao
//! assistente categories --categories ./campus.toml biblioteca
//! ```
//!
use crate::classifier::{table::Category, CategoryTable, Classifier};
use crate::core::config;
use crate::core::error::Result;
use anyhow::bail;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Arguments for `assistente categories`.
#[derive(Parser, Debug)]
pub struct CategoriesArgs {
    /// Show a single category in detail.
    pub key: Option<String>,

    /// Category table (TOML) to list instead of the built-in catalog.
    #[arg(long, value_name = "FILE")]
    pub categories: Option<PathBuf>,
}

pub async fn handle_categories(args: CategoriesArgs) -> Result<()> {
    info!("Handling categories command");
    let cfg = config::load_config()?;
    let table_path = args.categories.or(cfg.classifier.categories);
    let classifier = Classifier::from_source(table_path.as_deref())?;
    let table = classifier.table();

    match args.key.as_deref() {
        None => print!("{}", render_table(table)),
        Some(key) => match table.get(key) {
            Some(category) => print!("{}", render_category(table, category)),
            None => bail!("Unknown category '{}'", key),
        },
    }
    Ok(())
}

fn render_table(table: &CategoryTable) -> String {
    let width = table.iter().map(|c| c.key().chars().count()).max().unwrap_or(0);
    let mut out = format!("Categories ({}):\n", table.len());
    for category in table.iter() {
        let padding = width - category.key().chars().count();
        out.push_str(&format!(
            "  {}{}  patterns: {:<2} responses: {}{}\n",
            category.key(),
            " ".repeat(padding),
            category.patterns().len(),
            category.responses().len(),
            if table.is_fallback(category) {
                "  (fallback)"
            } else {
                ""
            }
        ));
    }
    out
}

fn render_category(table: &CategoryTable, category: &Category) -> String {
    let mut out = format!("Category: {}", category.key());
    if table.is_fallback(category) {
        out.push_str(" (fallback)");
    }
    out.push('\n');

    out.push_str(&format!("Patterns ({}):\n", category.patterns().len()));
    for pattern in category.patterns() {
        out.push_str(&format!("  {}\n", pattern.source()));
        out.push_str(&format!(
            "    trigger words: {}\n",
            pattern.trigger_words().join(", ")
        ));
    }

    out.push_str(&format!("Responses ({}):\n", category.responses().len()));
    for (i, response) in category.responses().iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, response));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::catalog;

    #[test]
    fn test_render_builtin_table() {
        let table = catalog::builtin_table().unwrap();
        let rendered = render_table(&table);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], format!("Categories ({}):", table.len()));
        assert!(lines[1].trim_start().starts_with("saudacao"));
        assert!(lines[1].contains("responses: 3"));
        let last = lines.last().unwrap();
        assert!(last.trim_start().starts_with("padrao"));
        assert!(last.ends_with("(fallback)"));
        assert_eq!(rendered.matches("(fallback)").count(), 1);
    }

    #[test]
    fn test_keys_are_aligned() {
        let table = CategoryTable::from_toml_str(
            r#"
            [[category]]
            key = "a"
            patterns = ['x']
            responses = ["1"]

            [[category]]
            key = "mais_longa"
            fallback = true
            responses = ["2"]
            "#,
        )
        .unwrap();
        let rendered = render_table(&table);
        let columns: Vec<usize> = rendered
            .lines()
            .skip(1)
            .map(|line| line.find("patterns:").unwrap())
            .collect();
        assert_eq!(columns[0], columns[1]);
    }

    #[test]
    fn test_render_single_category() {
        let table = CategoryTable::from_toml_str(
            r#"
            [[category]]
            key = "biblioteca"
            patterns = ['\b(livro|livros)\b']
            responses = ["Abre às 8h.", "Fecha às 21h."]

            [[category]]
            key = "outro"
            fallback = true
            responses = ["Pode repetir?"]
            "#,
        )
        .unwrap();

        let biblioteca = table.get("biblioteca").unwrap();
        assert_eq!(
            render_category(&table, biblioteca),
            "Category: biblioteca\n\
             Patterns (1):\n  \\b(livro|livros)\\b\n    trigger words: b, livro, livros, b\n\
             Responses (2):\n  1. Abre às 8h.\n  2. Fecha às 21h.\n"
        );

        let outro = render_category(&table, table.fallback());
        assert!(outro.starts_with("Category: outro (fallback)\nPatterns (0):\n"));
    }
}

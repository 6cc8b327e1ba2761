//! # Category Matcher
//!
//! File: cli/src/classifier/matcher.rs
//!
//! ## Overview
//!
//! Scores every non-fallback category against a normalized message and picks the
//! winner. A category's score is the sum of its patterns' scores (see
//! `pattern::Pattern::score`).
//!
//! ## Tie-break
//!
//! A category only replaces the current winner when its score is *strictly* greater,
//! so among equal scores the category defined first in the table wins. When nothing
//! scores above zero the fallback category is returned with a score of zero.
//!
use super::table::{Category, CategoryTable};
use tracing::trace;

/// Winning category for one message.
#[derive(Debug, Clone, Copy)]
pub struct Match<'t> {
    pub category: &'t Category,
    pub score: u32,
}

/// Total score of `category` for an already normalized message.
pub fn score_category(category: &Category, normalized: &str) -> u32 {
    category
        .patterns()
        .iter()
        .map(|pattern| pattern.score(normalized))
        .sum()
}

/// Picks the best category for `normalized`, falling back when nothing scores.
pub fn best_category<'t>(table: &'t CategoryTable, normalized: &str) -> Match<'t> {
    let mut best = Match {
        category: table.fallback(),
        score: 0,
    };

    for category in table.scored() {
        let score = score_category(category, normalized);
        if score > 0 {
            trace!("Category '{}' scored {}", category.key(), score);
        }
        if score > best.score {
            best = Match { category, score };
        }
    }

    best
}

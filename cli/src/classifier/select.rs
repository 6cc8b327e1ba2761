//! # Response Selection
//!
//! File: cli/src/classifier/select.rs
//!
//! Uniform pick among a category's responses. The random source is injected so
//! callers can use the thread-local generator in production and a seeded `StdRng`
//! in tests or from `assistente ask --seed`.
//!
use super::table::Category;
use rand::{seq::SliceRandom, Rng};

/// Picks one response uniformly at random. A single-response category always
/// returns that response.
pub fn select_response<'c, R: Rng + ?Sized>(category: &'c Category, rng: &mut R) -> &'c str {
    match category.responses() {
        [only] => only.as_str(),
        // Tables reject empty response lists, so `choose` always yields a value here.
        responses => responses.choose(rng).map(String::as_str).unwrap_or_default(),
    }
}

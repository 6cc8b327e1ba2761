//! # Text Normalization
//!
//! File: cli/src/classifier/normalize.rs
//!
//! Lowercases a message and strips diacritics so that "OLÁ", "Olá" and "ola" all
//! reach the matcher as `ola`. Punctuation, digits and whitespace pass through.
//!
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Lowercases `text`, decomposes it (NFD) and drops every combining mark.
///
/// Lowercasing happens first so that uppercase letters whose lowercase form carries
/// a mark (e.g. `İ`) lose it as well. Never fails; the empty string maps to itself.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_diacritics_and_case() {
        assert!(normalize("OLÁ").contains("ola"));
        assert_eq!(normalize("Inscrição"), "inscricao");
        assert_eq!(normalize("Informática Básica"), "informatica basica");
        assert_eq!(normalize("ÔNIBUS"), "onibus");
    }

    #[test]
    fn test_keeps_punctuation_digits_and_whitespace() {
        assert_eq!(normalize("Oi, bom dia!"), "oi, bom dia!");
        assert_eq!(normalize("  (27) 3243-8153 \t"), "  (27) 3243-8153 \t");
    }

    #[test]
    fn test_empty_and_symbol_only_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("?!#@"), "?!#@");
    }

    #[test]
    fn test_idempotent() {
        for input in [
            "Olá, TUDO BEM?",
            "Qual o horário de funcionamento?",
            "çãõéíú ÇÃÕÉÍÚ",
            "İstanbul",
            "日本語 mixed ñandú",
            "",
        ] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_cedilla_collapses_to_c() {
        assert_eq!(normalize("preço"), "preco");
    }
}

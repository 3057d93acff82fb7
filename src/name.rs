// src/name.rs

//! Recipe name normalization
//!
//! Handwritten recipe names arrive with stray punctuation, digits, mixed
//! case and odd separators. Normalization maps them onto a canonical form:
//!
//! 1. `-` and `_` become spaces
//! 2. everything other than ASCII letters and whitespace is dropped
//! 3. runs of whitespace collapse to a single space, ends are trimmed
//! 4. every word is capitalized, the rest of it lowercased
//!
//! An input with nothing left after these steps is rejected.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-_]").expect("separator pattern is valid"));

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z\s]").expect("disallowed pattern is valid"));

/// Error returned when a name normalizes to nothing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("Invalid recipe name")]
    Empty,
}

/// Normalize a handwritten recipe name
///
/// ```
/// use cookbook::normalize_name;
///
/// assert_eq!(normalize_name("Riz@z RISO00tto!").unwrap(), "Rizz Risotto");
/// assert_eq!(normalize_name("alpHa-alFRedo").unwrap(), "Alpha Alfredo");
/// assert!(normalize_name("__").is_err());
/// ```
pub fn normalize_name(raw: &str) -> Result<String, NameError> {
    let spaced = SEPARATORS.replace_all(raw, " ");
    let letters = DISALLOWED.replace_all(&spaced, "");

    let words: Vec<String> = letters.split_whitespace().map(capitalize).collect();
    if words.is_empty() {
        return Err(NameError::Empty);
    }

    Ok(words.join(" "))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_names() {
        assert_eq!(normalize_name("meatball").unwrap(), "Meatball");
        assert_eq!(normalize_name("Skibidi spaghetti").unwrap(), "Skibidi Spaghetti");
        assert_eq!(normalize_name("RISOTTO").unwrap(), "Risotto");
    }

    #[test]
    fn test_separators_become_spaces() {
        assert_eq!(normalize_name("alpHa-alFRedo").unwrap(), "Alpha Alfredo");
        assert_eq!(normalize_name("hot_dog").unwrap(), "Hot Dog");
        assert_eq!(normalize_name("a--b__c").unwrap(), "A B C");
    }

    #[test]
    fn test_disallowed_characters_dropped() {
        assert_eq!(normalize_name("Riz@z RISO00tto!").unwrap(), "Rizz Risotto");
        assert_eq!(normalize_name("p1zza").unwrap(), "Pzza");
        assert_eq!(normalize_name("crème brûlée").unwrap(), "Crme Brle");
    }

    #[test]
    fn test_whitespace_collapsed_and_trimmed() {
        assert_eq!(normalize_name("  fish \t and\n chips  ").unwrap(), "Fish And Chips");
        // Digits vanish without leaving a gap
        assert_eq!(normalize_name("soup 42 du jour").unwrap(), "Soup Du Jour");
    }

    #[test]
    fn test_empty_result_rejected() {
        assert_eq!(normalize_name(""), Err(NameError::Empty));
        assert_eq!(normalize_name("__"), Err(NameError::Empty));
        assert_eq!(normalize_name("123 !!"), Err(NameError::Empty));
        assert_eq!(normalize_name("   "), Err(NameError::Empty));
    }
}

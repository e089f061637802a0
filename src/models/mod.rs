//! Data models for the catalog

pub mod author;
pub mod book;
pub mod comment;

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer};
use validator::ValidationError;

// Re-export commonly used types
pub use author::{Author, AuthorForm};
pub use book::{Book, BookDetails, BookFilter, BookForm, NewBook};
pub use comment::{Comment, CommentDetails, CommentFilter, CommentForm, NewComment};

/// Letters (Latin and Cyrillic), ASCII whitespace and hyphens, at least one character.
/// `\s` would also admit Unicode spaces such as NBSP.
pub(crate) static PERSON_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-zА-Яа-яЁё \t\n\x0B\f\r\-]+$").expect("valid regex"));

/// Same alphabet as [`PERSON_NAME`], empty allowed
pub(crate) static GENRE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-zА-Яа-яЁё \t\n\x0B\f\r\-]*$").expect("valid regex"));

/// Rejects values made only of whitespace.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

/// Form inputs arrive as strings; an empty or unparseable value is treated as absent.
pub(crate) fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.trim().parse::<T>().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn person_name_alphabet() {
        assert!(PERSON_NAME.is_match("Leo Tolstoy"));
        assert!(PERSON_NAME.is_match("Лев Толстой"));
        assert!(PERSON_NAME.is_match("Jean-Paul Sartre"));
        assert!(PERSON_NAME.is_match("Пётр"));
        assert!(!PERSON_NAME.is_match("R2-D2"));
        assert!(!PERSON_NAME.is_match("O'Brien"));
        assert!(!PERSON_NAME.is_match(""));
    }

    #[test]
    fn unicode_spaces_are_not_whitespace() {
        assert!(PERSON_NAME.is_match("Leo\tTolstoy"));
        assert!(!PERSON_NAME.is_match("Leo\u{00A0}Tolstoy"));
        assert!(!PERSON_NAME.is_match("Anna\u{2003}\u{2028}X"));
        assert!(!GENRE.is_match("science\u{00A0}fiction"));
    }

    #[test]
    fn genre_allows_empty() {
        assert!(GENRE.is_match(""));
        assert!(GENRE.is_match("science fiction"));
        assert!(!GENRE.is_match("sci-fi!"));
    }

    #[test]
    fn blank_values_are_rejected() {
        assert!(not_blank("   ").is_err());
        assert!(not_blank("").is_err());
        assert!(not_blank(" a ").is_ok());
    }
}

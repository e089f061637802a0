//! Author model and form

use serde::Deserialize;
use sqlx::FromRow;
use validator::Validate;

use super::{not_blank, PERSON_NAME};

/// Author row
#[derive(Debug, Clone, FromRow)]
pub struct Author {
    pub id: i64,
    pub name: String,
}

/// Add/edit author form
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct AuthorForm {
    #[serde(default)]
    #[validate(
        custom(function = "not_blank", message = "Author name must not be blank"),
        length(min = 2, max = 100, message = "Author name must be between 2 and 100 characters"),
        regex(path = *PERSON_NAME, message = "Author name may contain only letters, spaces and hyphens")
    )]
    pub name: String,
}

impl AuthorForm {
    /// Strip surrounding whitespace; applied before validation and storage.
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
        }
    }
}

impl From<&Author> for AuthorForm {
    fn from(author: &Author) -> Self {
        Self {
            name: author.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str) -> AuthorForm {
        AuthorForm { name: name.to_string() }
    }

    #[test]
    fn accepts_valid_names() {
        assert!(form("Anna Akhmatova").validate().is_ok());
        assert!(form("Достоевский").validate().is_ok());
        assert!(form("Li").validate().is_ok());
    }

    #[test]
    fn rejects_short_long_and_blank_names() {
        assert!(form("A").validate().is_err());
        assert!(form(&"a".repeat(101)).validate().is_err());
        assert!(form(&"a".repeat(100)).validate().is_ok());
        assert!(form("   ").validate().is_err());
    }

    #[test]
    fn length_counts_characters() {
        // 100 two-byte characters
        assert!(form(&"я".repeat(100)).validate().is_ok());
    }

    #[test]
    fn trims_before_validation() {
        let author = form("  Gogol \n").trimmed();
        assert_eq!(author.name, "Gogol");
        assert!(author.validate().is_ok());
        // a single letter padded with spaces is still too short
        assert!(form(" A ").trimmed().validate().is_err());
    }

    #[test]
    fn rejects_non_breaking_space() {
        assert!(form("Anna\u{00A0}Akhmatova").validate().is_err());
    }

    #[test]
    fn rejects_digits_and_punctuation() {
        let errors = form("Agent 007").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
        assert!(form("Smith, John").validate().is_err());
    }
}

//! Book model, form and list filter

use serde::Deserialize;
use sqlx::FromRow;
use validator::Validate;

use super::{empty_as_none, not_blank, GENRE};
use crate::error::{AppError, AppResult};

/// Book row
#[derive(Debug, Clone, FromRow)]
pub struct Book {
    pub id: i64,
    pub name: String,
    pub genre: Option<String>,
    pub author_id: i64,
}

/// Book joined with its author's name, for listings
#[derive(Debug, Clone, FromRow)]
pub struct BookDetails {
    pub id: i64,
    pub name: String,
    pub genre: Option<String>,
    pub author_id: i64,
    pub author_name: String,
}

/// Validated values written by the repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub name: String,
    pub genre: Option<String>,
    pub author_id: i64,
}

/// Add/edit book form
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct BookForm {
    #[serde(default)]
    #[validate(
        custom(function = "not_blank", message = "Book title must not be blank"),
        length(min = 1, max = 200, message = "Book title must be between 1 and 200 characters")
    )]
    pub name: String,

    #[serde(default)]
    #[validate(
        length(max = 100, message = "Genre must not exceed 100 characters"),
        regex(path = *GENRE, message = "Genre may contain only letters, spaces and hyphens")
    )]
    pub genre: String,

    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(required(message = "An author must be selected"))]
    pub author_id: Option<i64>,
}

impl BookForm {
    /// Strip surrounding whitespace; applied before validation and storage.
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            genre: self.genre.trim().to_string(),
            author_id: self.author_id,
        }
    }

    /// Convert a trimmed form that passed [`Validate::validate`] into a write.
    pub fn to_new_book(&self) -> AppResult<NewBook> {
        let author_id = self
            .author_id
            .ok_or_else(|| AppError::Validation("An author must be selected".to_string()))?;
        Ok(NewBook {
            name: self.name.clone(),
            genre: (!self.genre.is_empty()).then(|| self.genre.clone()),
            author_id,
        })
    }
}

impl From<&Book> for BookForm {
    fn from(book: &Book) -> Self {
        Self {
            name: book.name.clone(),
            genre: book.genre.clone().unwrap_or_default(),
            author_id: Some(book.author_id),
        }
    }
}

/// `GET /books` query
#[derive(Debug, Default, Deserialize)]
pub struct BookFilter {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub author_id: Option<i64>,
}

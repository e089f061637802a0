//! Comment (reader review) model, form and list filter

use serde::Deserialize;
use sqlx::FromRow;
use validator::Validate;

use super::{empty_as_none, not_blank, PERSON_NAME};
use crate::error::{AppError, AppResult};

/// Comment row
#[derive(Debug, Clone, FromRow)]
pub struct Comment {
    pub id: i64,
    pub reader: String,
    pub rating: i32,
    pub book_id: i64,
}

/// Comment joined with the reviewed book's title, for listings
#[derive(Debug, Clone, FromRow)]
pub struct CommentDetails {
    pub id: i64,
    pub reader: String,
    pub rating: i32,
    pub book_id: i64,
    pub book_name: String,
}

/// Validated values written by the repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub reader: String,
    pub rating: i32,
    pub book_id: i64,
}

/// Add/edit comment form
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CommentForm {
    #[serde(default)]
    #[validate(
        custom(function = "not_blank", message = "Reader name must not be blank"),
        length(min = 2, max = 100, message = "Reader name must be between 2 and 100 characters"),
        regex(path = *PERSON_NAME, message = "Reader name may contain only letters, spaces and hyphens")
    )]
    pub reader: String,

    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(
        required(message = "Rating is required"),
        range(min = 1, max = 5, message = "Rating must be between 1 and 5")
    )]
    pub rating: Option<i32>,

    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(required(message = "A book must be selected"))]
    pub book_id: Option<i64>,
}

impl CommentForm {
    /// Strip surrounding whitespace; applied before validation and storage.
    pub fn trimmed(self) -> Self {
        Self {
            reader: self.reader.trim().to_string(),
            ..self
        }
    }

    /// Convert a trimmed form that passed [`Validate::validate`] into a write.
    pub fn to_new_comment(&self) -> AppResult<NewComment> {
        let rating = self
            .rating
            .ok_or_else(|| AppError::Validation("Rating is required".to_string()))?;
        let book_id = self
            .book_id
            .ok_or_else(|| AppError::Validation("A book must be selected".to_string()))?;
        Ok(NewComment {
            reader: self.reader.clone(),
            rating,
            book_id,
        })
    }
}

impl From<&Comment> for CommentForm {
    fn from(comment: &Comment) -> Self {
        Self {
            reader: comment.reader.clone(),
            rating: Some(comment.rating),
            book_id: Some(comment.book_id),
        }
    }
}

/// `GET /comments` query
#[derive(Debug, Default, Deserialize)]
pub struct CommentFilter {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub book_id: Option<i64>,
}

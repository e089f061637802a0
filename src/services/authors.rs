//! Authors service

use crate::{error::AppResult, models::Author, repository::Repository};

#[derive(Clone)]
pub struct AuthorsService {
    repository: Repository,
}

impl AuthorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Author>> {
        self.repository.authors.list().await
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Author>> {
        self.repository.authors.get_by_id(id).await
    }

    /// Create when `id` is `None`, otherwise update that author.
    ///
    /// Name uniqueness is left to the database; a duplicate surfaces as
    /// `AppError::Conflict`.
    pub async fn save(&self, id: Option<i64>, name: &str) -> AppResult<Author> {
        let author = match id {
            None => self.repository.authors.create(name).await?,
            Some(id) => self.repository.authors.update(id, name).await?,
        };
        tracing::info!(author_id = author.id, "Saved author '{}'", author.name);
        Ok(author)
    }

    /// Delete an author together with its books and their comments
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let removed = self.repository.authors.delete(id).await?;
        if removed == 0 {
            tracing::debug!(author_id = id, "Delete requested for unknown author");
        } else {
            tracing::info!(author_id = id, "Deleted author");
        }
        Ok(())
    }
}

//! Books service

use crate::{
    error::AppResult,
    models::{Book, BookDetails, NewBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<BookDetails>> {
        self.repository.books.list().await
    }

    pub async fn list_by_author(&self, author_id: i64) -> AppResult<Vec<BookDetails>> {
        self.repository.books.list_by_author(author_id).await
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Book>> {
        self.repository.books.get_by_id(id).await
    }

    /// Create when `id` is `None`, otherwise update that book.
    /// Titles are not required to be unique, not even per author.
    pub async fn save(&self, id: Option<i64>, data: &NewBook) -> AppResult<Book> {
        let book = match id {
            None => self.repository.books.create(data).await?,
            Some(id) => self.repository.books.update(id, data).await?,
        };
        tracing::info!(book_id = book.id, author_id = book.author_id, "Saved book '{}'", book.name);
        Ok(book)
    }

    /// Delete a book together with its comments
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let removed = self.repository.books.delete(id).await?;
        if removed == 0 {
            tracing::debug!(book_id = id, "Delete requested for unknown book");
        } else {
            tracing::info!(book_id = id, "Deleted book");
        }
        Ok(())
    }
}

//! Books repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookDetails, NewBook},
};

const BOOK_COLUMNS: &str = "id, name, genre, authors_id AS author_id";

const DETAILS_SELECT: &str = r#"
    SELECT b.id, b.name, b.genre, b.authors_id AS author_id, a.name AS author_name
    FROM books b
    JOIN authors a ON a.id = b.authors_id
"#;

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all books with their author names
    pub async fn list(&self) -> AppResult<Vec<BookDetails>> {
        let query = format!("{} ORDER BY b.name, b.id", DETAILS_SELECT);
        let rows = sqlx::query_as::<_, BookDetails>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Books whose author reference equals `author_id`
    pub async fn list_by_author(&self, author_id: i64) -> AppResult<Vec<BookDetails>> {
        let query = format!("{} WHERE b.authors_id = $1 ORDER BY b.name, b.id", DETAILS_SELECT);
        let rows = sqlx::query_as::<_, BookDetails>(&query)
            .bind(author_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Option<Book>> {
        let query = format!("SELECT {} FROM books WHERE id = $1", BOOK_COLUMNS);
        let row = sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Insert a book. An unknown author comes back as [`AppError::BadRequest`].
    pub async fn create(&self, data: &NewBook) -> AppResult<Book> {
        let query = format!(
            "INSERT INTO books (name, genre, authors_id) VALUES ($1, $2, $3) RETURNING {}",
            BOOK_COLUMNS
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(&data.name)
            .bind(&data.genre)
            .bind(data.author_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::from_write)
    }

    pub async fn update(&self, id: i64, data: &NewBook) -> AppResult<Book> {
        let query = format!(
            "UPDATE books SET name = $1, genre = $2, authors_id = $3 WHERE id = $4 RETURNING {}",
            BOOK_COLUMNS
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(&data.name)
            .bind(&data.genre)
            .bind(data.author_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from_write)?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// Delete a book and, through the foreign key, its comments
    pub async fn delete(&self, id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

//! Comments repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{Comment, CommentDetails, NewComment},
};

const COMMENT_COLUMNS: &str = "id, reader, rating, books_id AS book_id";

const DETAILS_SELECT: &str = r#"
    SELECT c.id, c.reader, c.rating, c.books_id AS book_id, b.name AS book_name
    FROM comments c
    JOIN books b ON b.id = c.books_id
"#;

#[derive(Clone)]
pub struct CommentsRepository {
    pool: Pool<Postgres>,
}

impl CommentsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all comments with the title of the reviewed book
    pub async fn list(&self) -> AppResult<Vec<CommentDetails>> {
        let query = format!("{} ORDER BY c.id", DETAILS_SELECT);
        let rows = sqlx::query_as::<_, CommentDetails>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Comments whose book reference equals `book_id`
    pub async fn list_by_book(&self, book_id: i64) -> AppResult<Vec<CommentDetails>> {
        let query = format!("{} WHERE c.books_id = $1 ORDER BY c.id", DETAILS_SELECT);
        let rows = sqlx::query_as::<_, CommentDetails>(&query)
            .bind(book_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Option<Comment>> {
        let query = format!("SELECT {} FROM comments WHERE id = $1", COMMENT_COLUMNS);
        let row = sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn create(&self, data: &NewComment) -> AppResult<Comment> {
        let query = format!(
            "INSERT INTO comments (reader, rating, books_id) VALUES ($1, $2, $3) RETURNING {}",
            COMMENT_COLUMNS
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(&data.reader)
            .bind(data.rating)
            .bind(data.book_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::from_write)
    }

    pub async fn update(&self, id: i64, data: &NewComment) -> AppResult<Comment> {
        let query = format!(
            "UPDATE comments SET reader = $1, rating = $2, books_id = $3 WHERE id = $4 RETURNING {}",
            COMMENT_COLUMNS
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(&data.reader)
            .bind(data.rating)
            .bind(data.book_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from_write)?
            .ok_or_else(|| AppError::NotFound(format!("Comment {} not found", id)))
    }

    pub async fn delete(&self, id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

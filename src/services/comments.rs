//! Comments service

use crate::{
    error::AppResult,
    models::{Comment, CommentDetails, NewComment},
    repository::Repository,
};

#[derive(Clone)]
pub struct CommentsService {
    repository: Repository,
}

impl CommentsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<CommentDetails>> {
        self.repository.comments.list().await
    }

    pub async fn list_by_book(&self, book_id: i64) -> AppResult<Vec<CommentDetails>> {
        self.repository.comments.list_by_book(book_id).await
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Comment>> {
        self.repository.comments.get_by_id(id).await
    }

    pub async fn save(&self, id: Option<i64>, data: &NewComment) -> AppResult<Comment> {
        let comment = match id {
            None => self.repository.comments.create(data).await?,
            Some(id) => self.repository.comments.update(id, data).await?,
        };
        tracing::info!(comment_id = comment.id, book_id = comment.book_id, "Saved comment");
        Ok(comment)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let removed = self.repository.comments.delete(id).await?;
        if removed > 0 {
            tracing::info!(comment_id = id, "Deleted comment");
        }
        Ok(())
    }
}

//! HTTP handlers and routing for the catalog pages

pub mod authors;
pub mod books;
pub mod comments;
pub mod health;

use axum::{
    extract::{Path, Query},
    response::Redirect,
    routing::get,
    Form, Router,
};
use axum_extra::extract::WithRejection;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::{error::AppError, AppState};

/// Extractors whose rejections render through [`AppError`]'s HTML error page
pub type FormData<T> = WithRejection<Form<T>, AppError>;
pub type QueryData<T> = WithRejection<Query<T>, AppError>;
pub type PathId = WithRejection<Path<i64>, AppError>;

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/authors") }))
        // Health
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Authors
        .route("/authors", get(authors::list_authors))
        .route("/authors/add", get(authors::add_form).post(authors::create_author))
        .route("/authors/edit/:id", get(authors::edit_form).post(authors::update_author))
        .route("/authors/delete/:id", get(authors::delete_author).post(authors::delete_author))
        // Books
        .route("/books", get(books::list_books))
        .route("/books/add", get(books::add_form).post(books::create_book))
        .route("/books/edit/:id", get(books::edit_form).post(books::update_book))
        .route("/books/delete/:id", get(books::delete_book).post(books::delete_book))
        // Comments
        .route("/comments", get(comments::list_comments))
        .route("/comments/add", get(comments::add_form).post(comments::create_comment))
        .route("/comments/edit/:id", get(comments::edit_form).post(comments::update_comment))
        .route("/comments/delete/:id", get(comments::delete_comment).post(comments::delete_comment))
        .fallback(not_found)
        .with_state(state)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn not_found() -> AppError {
    AppError::NotFound("Page not found".to_string())
}

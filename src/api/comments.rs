//! Comment pages and form handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::WithRejection;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{CommentFilter, CommentForm},
    views::{self, FieldErrors, FormMode},
    AppState,
};

use super::{FormData, PathId, QueryData};

/// List comments, or only one book's comments with `?book_id=`
pub async fn list_comments(
    State(state): State<AppState>,
    WithRejection(Query(filter), _): QueryData<CommentFilter>,
) -> AppResult<Html<String>> {
    let page = match filter.book_id {
        Some(book_id) => {
            let book = state.services.books.find_by_id(book_id).await?;
            let comments = state.services.comments.list_by_book(book_id).await?;
            views::comments::list(&comments, book.as_ref())
        }
        None => {
            let comments = state.services.comments.list().await?;
            views::comments::list(&comments, None)
        }
    };
    Ok(Html(page))
}

pub async fn add_form(State(state): State<AppState>) -> AppResult<Html<String>> {
    render_form(&state, FormMode::Add, &CommentForm::default(), &FieldErrors::default()).await
}

pub async fn create_comment(
    State(state): State<AppState>,
    WithRejection(Form(form), _): FormData<CommentForm>,
) -> AppResult<Response> {
    save_comment(&state, None, form).await
}

pub async fn edit_form(
    State(state): State<AppState>,
    WithRejection(Path(id), _): PathId,
) -> AppResult<Html<String>> {
    let comment = state
        .services
        .comments
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Comment {} not found", id)))?;
    render_form(&state, FormMode::Edit(id), &CommentForm::from(&comment), &FieldErrors::default()).await
}

pub async fn update_comment(
    State(state): State<AppState>,
    WithRejection(Path(id), _): PathId,
    WithRejection(Form(form), _): FormData<CommentForm>,
) -> AppResult<Response> {
    save_comment(&state, Some(id), form).await
}

pub async fn delete_comment(
    State(state): State<AppState>,
    WithRejection(Path(id), _): PathId,
) -> AppResult<Redirect> {
    state.services.comments.delete(id).await?;
    Ok(Redirect::to("/comments"))
}

async fn render_form(
    state: &AppState,
    mode: FormMode,
    form: &CommentForm,
    errors: &FieldErrors,
) -> AppResult<Html<String>> {
    let books = state.services.books.list().await?;
    Ok(Html(views::comments::form(mode, form, &books, errors)))
}

async fn save_comment(state: &AppState, id: Option<i64>, form: CommentForm) -> AppResult<Response> {
    let mode = FormMode::for_id(id);
    let form = form.trimmed();

    if let Err(errors) = form.validate() {
        let page = render_form(state, mode, &form, &FieldErrors::from(&errors)).await?;
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response());
    }

    let data = form.to_new_comment()?;
    match state.services.comments.save(id, &data).await {
        Ok(_) => Ok(Redirect::to("/comments").into_response()),
        Err(AppError::BadRequest(constraint)) => {
            tracing::warn!(%constraint, book_id = data.book_id, "Comment references a missing book");
            let mut errors = FieldErrors::default();
            errors.add("book_id", "Selected book does not exist");
            let page = render_form(state, mode, &form, &errors).await?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
        }
        Err(e) => Err(e),
    }
}

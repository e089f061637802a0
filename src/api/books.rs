//! Book pages and form handlers

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
    models::{BookFilter, BookForm},
    views::{self, FieldErrors, FormMode},
    AppState,
};

use super::{FormData, PathId, QueryData};

/// List books, or only one author's books with `?author_id=`
pub async fn list_books(
    State(state): State<AppState>,
    WithRejection(Query(filter), _): QueryData<BookFilter>,
) -> AppResult<Html<String>> {
    let page = match filter.author_id {
        Some(author_id) => {
            let author = state.services.authors.find_by_id(author_id).await?;
            let books = state.services.books.list_by_author(author_id).await?;
            views::books::list(&books, author.as_ref())
        }
        None => {
            let books = state.services.books.list().await?;
            views::books::list(&books, None)
        }
    };
    Ok(Html(page))
}

pub async fn add_form(State(state): State<AppState>) -> AppResult<Html<String>> {
    render_form(&state, FormMode::Add, &BookForm::default(), &FieldErrors::default()).await
}

pub async fn create_book(
    State(state): State<AppState>,
    WithRejection(Form(form), _): FormData<BookForm>,
) -> AppResult<Response> {
    save_book(&state, None, form).await
}

pub async fn edit_form(
    State(state): State<AppState>,
    WithRejection(Path(id), _): PathId,
) -> AppResult<Html<String>> {
    let book = state
        .services
        .books
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))?;
    render_form(&state, FormMode::Edit(id), &BookForm::from(&book), &FieldErrors::default()).await
}

pub async fn update_book(
    State(state): State<AppState>,
    WithRejection(Path(id), _): PathId,
    WithRejection(Form(form), _): FormData<BookForm>,
) -> AppResult<Response> {
    save_book(&state, Some(id), form).await
}

/// Delete a book and its comments
pub async fn delete_book(
    State(state): State<AppState>,
    WithRejection(Path(id), _): PathId,
) -> AppResult<Redirect> {
    state.services.books.delete(id).await?;
    Ok(Redirect::to("/books"))
}

async fn render_form(
    state: &AppState,
    mode: FormMode,
    form: &BookForm,
    errors: &FieldErrors,
) -> AppResult<Html<String>> {
    let authors = state.services.authors.list().await?;
    Ok(Html(views::books::form(mode, form, &authors, errors)))
}

async fn save_book(state: &AppState, id: Option<i64>, form: BookForm) -> AppResult<Response> {
    let mode = FormMode::for_id(id);
    let form = form.trimmed();

    if let Err(errors) = form.validate() {
        let page = render_form(state, mode, &form, &FieldErrors::from(&errors)).await?;
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response());
    }

    let data = form.to_new_book()?;
    match state.services.books.save(id, &data).await {
        Ok(_) => Ok(Redirect::to("/books").into_response()),
        Err(AppError::BadRequest(constraint)) => {
            tracing::warn!(%constraint, author_id = data.author_id, "Book references a missing author");
            let mut errors = FieldErrors::default();
            errors.add("author_id", "Selected author does not exist");
            let page = render_form(state, mode, &form, &errors).await?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
        }
        Err(e) => Err(e),
    }
}

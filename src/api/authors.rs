//! Author pages and form handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::WithRejection;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::AuthorForm,
    views::{self, FieldErrors, FormMode},
    AppState,
};

use super::{FormData, PathId};

/// List all authors
pub async fn list_authors(State(state): State<AppState>) -> AppResult<Html<String>> {
    let authors = state.services.authors.list().await?;
    Ok(Html(views::authors::list(&authors)))
}

/// Empty add form
pub async fn add_form() -> Html<String> {
    Html(views::authors::form(
        FormMode::Add,
        &AuthorForm::default(),
        &FieldErrors::default(),
        None,
    ))
}

pub async fn create_author(
    State(state): State<AppState>,
    WithRejection(Form(form), _): FormData<AuthorForm>,
) -> AppResult<Response> {
    save_author(&state, None, form).await
}

/// Edit form prefilled from the stored author
pub async fn edit_form(
    State(state): State<AppState>,
    WithRejection(Path(id), _): PathId,
) -> AppResult<Html<String>> {
    let author = state
        .services
        .authors
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Author {} not found", id)))?;
    Ok(Html(views::authors::form(
        FormMode::Edit(id),
        &AuthorForm::from(&author),
        &FieldErrors::default(),
        None,
    )))
}

pub async fn update_author(
    State(state): State<AppState>,
    WithRejection(Path(id), _): PathId,
    WithRejection(Form(form), _): FormData<AuthorForm>,
) -> AppResult<Response> {
    save_author(&state, Some(id), form).await
}

/// Delete an author with all its books and comments
pub async fn delete_author(
    State(state): State<AppState>,
    WithRejection(Path(id), _): PathId,
) -> AppResult<Redirect> {
    state.services.authors.delete(id).await?;
    Ok(Redirect::to("/authors"))
}

async fn save_author(state: &AppState, id: Option<i64>, form: AuthorForm) -> AppResult<Response> {
    let mode = FormMode::for_id(id);
    let form = form.trimmed();

    if let Err(errors) = form.validate() {
        let page = views::authors::form(mode, &form, &FieldErrors::from(&errors), None);
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response());
    }

    match state.services.authors.save(id, &form.name).await {
        Ok(_) => Ok(Redirect::to("/authors").into_response()),
        Err(AppError::Conflict(constraint)) => {
            tracing::warn!(%constraint, "Rejected duplicate author name '{}'", form.name);
            let message = format!("Author with name '{}' already exists!", form.name);
            let page = views::authors::form(mode, &form, &FieldErrors::default(), Some(&message));
            Ok((StatusCode::CONFLICT, Html(page)).into_response())
        }
        Err(e) => Err(e),
    }
}

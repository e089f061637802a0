//! Author pages

use std::fmt::Write;

use super::{alert, escape, layout, FieldErrors, FormMode};
use crate::models::{Author, AuthorForm};

/// `GET /authors`
pub fn list(authors: &[Author]) -> String {
    let mut body = String::from(r#"    <p><a href="/authors/add">Add author</a></p>"#);
    if authors.is_empty() {
        body.push_str(r#"<p class="empty">No authors yet.</p>"#);
        return layout("Authors", &body);
    }

    body.push_str("<table><tr><th>Name</th><th></th></tr>");
    for author in authors {
        let _ = write!(
            body,
            r#"<tr><td>{name}</td><td><a href="/books?author_id={id}">Books</a> <a href="/authors/edit/{id}">Edit</a> <a href="/authors/delete/{id}">Delete</a></td></tr>"#,
            id = author.id,
            name = escape(&author.name),
        );
    }
    body.push_str("</table>");
    layout("Authors", &body)
}

/// Add or edit form, re-rendered with `errors` and a form-level `error` on failure
pub fn form(mode: FormMode, form: &AuthorForm, errors: &FieldErrors, error: Option<&str>) -> String {
    let body = format!(
        r#"    {alert}
    <form method="post" action="{action}">
        <label for="name">Name</label>
        <input id="name" name="name" value="{name}" maxlength="100">
        {name_errors}
        <p><button type="submit">Save</button> <a href="/authors">Cancel</a></p>
    </form>"#,
        alert = alert(error),
        action = mode.action("/authors"),
        name = escape(&form.name),
        name_errors = errors.render("name"),
    );
    layout(&format!("{} author", mode.verb()), &body)
}

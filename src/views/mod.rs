//! Server-rendered HTML pages

pub mod authors;
pub mod books;
pub mod comments;

use std::collections::BTreeMap;
use std::fmt::Write;

use axum::http::StatusCode;
use validator::ValidationErrors;

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Whether a form creates a new record or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit(i64),
}

impl FormMode {
    pub fn for_id(id: Option<i64>) -> Self {
        id.map_or(FormMode::Add, FormMode::Edit)
    }

    /// Form action under a section root such as `/authors`
    pub fn action(&self, base: &str) -> String {
        match self {
            FormMode::Add => format!("{}/add", base),
            FormMode::Edit(id) => format!("{}/edit/{}", base, id),
        }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            FormMode::Add => "Add",
            FormMode::Edit(_) => "Edit",
        }
    }
}

/// Per-field error messages shown next to form inputs
#[derive(Debug, Clone, Default)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// `<ul class="errors">` for one field, empty when the field is clean
    fn render(&self, field: &str) -> String {
        let messages = self.get(field);
        if messages.is_empty() {
            return String::new();
        }
        let mut html = String::from(r#"<ul class="errors">"#);
        for message in messages {
            let _ = write!(html, "<li>{}</li>", escape(message));
        }
        html.push_str("</ul>");
        html
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut out = FieldErrors::default();
        for (field, list) in errors.field_errors() {
            for error in list.iter() {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                out.add(field.to_string(), message);
            }
        }
        out
    }
}

/// Form-level error banner (e.g. duplicate author name)
fn alert(error: Option<&str>) -> String {
    error
        .map(|message| format!(r#"<p class="alert">{}</p>"#, escape(message)))
        .unwrap_or_default()
}

/// `<option>` list for a select, marking `selected` and prefixed by a placeholder
fn options<'a>(
    items: impl IntoIterator<Item = (i64, &'a str)>,
    selected: Option<i64>,
    placeholder: &str,
) -> String {
    let mut html = format!(r#"<option value="">{}</option>"#, escape(placeholder));
    for (id, label) in items {
        let marker = if Some(id) == selected { " selected" } else { "" };
        let _ = write!(html, r#"<option value="{}"{}>{}</option>"#, id, marker, escape(label));
    }
    html
}

/// Wrap page content in the shared document shell.
pub fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} - Library</title>
    <style>
        body {{ font-family: system-ui, sans-serif; max-width: 860px; margin: 2rem auto; padding: 0 1rem; }}
        nav a {{ margin-right: 1rem; }}
        table {{ border-collapse: collapse; width: 100%; }}
        th, td {{ text-align: left; padding: 0.4rem; border-bottom: 1px solid #ddd; }}
        label {{ display: block; margin-top: 0.8rem; }}
        .errors {{ color: #b00020; margin: 0.2rem 0; padding-left: 1.2rem; }}
        .alert {{ background: #fdecea; color: #b00020; padding: 0.6rem; border-radius: 6px; }}
        .empty {{ color: #777; }}
    </style>
</head>
<body>
    <nav><a href="/authors">Authors</a><a href="/books">Books</a><a href="/comments">Comments</a></nav>
    <h1>{title}</h1>
{body}
</body>
</html>"#,
        title = escape(title),
        body = body,
    )
}

/// Error page used by `AppError`'s response conversion
pub fn error_page(status: StatusCode, message: &str) -> String {
    let title = status.canonical_reason().unwrap_or("Error");
    let body = format!(
        r#"    <p>{}</p>
    <p><a href="/authors">Back to the catalog</a></p>"#,
        escape(message)
    );
    layout(title, &body)
}

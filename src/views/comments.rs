//! Comment pages

use std::fmt::Write;

use super::{escape, layout, options, FieldErrors, FormMode};
use crate::models::{Book, BookDetails, CommentDetails, CommentForm};

/// `GET /comments`, optionally narrowed to one book's comments
pub fn list(comments: &[CommentDetails], book: Option<&Book>) -> String {
    let title = match book {
        Some(book) => format!("Comments on {}", book.name),
        None => "Comments".to_string(),
    };

    let mut body = String::from(r#"    <p><a href="/comments/add">Add comment</a>"#);
    if book.is_some() {
        body.push_str(r#" <a href="/comments">All comments</a>"#);
    }
    body.push_str("</p>");

    if comments.is_empty() {
        body.push_str(r#"<p class="empty">No comments.</p>"#);
        return layout(&title, &body);
    }

    body.push_str("<table><tr><th>Reader</th><th>Rating</th><th>Book</th><th></th></tr>");
    for comment in comments {
        let _ = write!(
            body,
            r#"<tr><td>{reader}</td><td>{rating}</td><td>{book}</td><td><a href="/comments/edit/{id}">Edit</a> <a href="/comments/delete/{id}">Delete</a></td></tr>"#,
            id = comment.id,
            reader = escape(&comment.reader),
            rating = comment.rating,
            book = escape(&comment.book_name),
        );
    }
    body.push_str("</table>");
    layout(&title, &body)
}

/// Add or edit form with a book select
pub fn form(mode: FormMode, form: &CommentForm, books: &[BookDetails], errors: &FieldErrors) -> String {
    let book_options = options(
        books.iter().map(|b| (b.id, b.name.as_str())),
        form.book_id,
        "Select a book",
    );
    let rating = form.rating.map(|r| r.to_string()).unwrap_or_default();
    let body = format!(
        r#"    <form method="post" action="{action}">
        <label for="reader">Reader</label>
        <input id="reader" name="reader" value="{reader}" maxlength="100">
        {reader_errors}
        <label for="rating">Rating (1-5)</label>
        <input id="rating" name="rating" type="number" min="1" max="5" value="{rating}">
        {rating_errors}
        <label for="book_id">Book</label>
        <select id="book_id" name="book_id">{book_options}</select>
        {book_errors}
        <p><button type="submit">Save</button> <a href="/comments">Cancel</a></p>
    </form>"#,
        action = mode.action("/comments"),
        reader = escape(&form.reader),
        reader_errors = errors.render("reader"),
        rating = rating,
        rating_errors = errors.render("rating"),
        book_options = book_options,
        book_errors = errors.render("book_id"),
    );
    layout(&format!("{} comment", mode.verb()), &body)
}

//! Book pages

use std::fmt::Write;

use super::{escape, layout, options, FieldErrors, FormMode};
use crate::models::{Author, BookDetails, BookForm};

/// `GET /books`, optionally narrowed to one author's books
pub fn list(books: &[BookDetails], author: Option<&Author>) -> String {
    let title = match author {
        Some(author) => format!("Books by {}", author.name),
        None => "Books".to_string(),
    };

    let mut body = String::from(r#"    <p><a href="/books/add">Add book</a>"#);
    if author.is_some() {
        body.push_str(r#" <a href="/books">All books</a>"#);
    }
    body.push_str("</p>");

    if books.is_empty() {
        body.push_str(r#"<p class="empty">No books.</p>"#);
        return layout(&title, &body);
    }

    body.push_str("<table><tr><th>Title</th><th>Genre</th><th>Author</th><th></th></tr>");
    for book in books {
        let _ = write!(
            body,
            r#"<tr><td>{name}</td><td>{genre}</td><td>{author}</td><td><a href="/comments?book_id={id}">Comments</a> <a href="/books/edit/{id}">Edit</a> <a href="/books/delete/{id}">Delete</a></td></tr>"#,
            id = book.id,
            name = escape(&book.name),
            genre = escape(book.genre.as_deref().unwrap_or("")),
            author = escape(&book.author_name),
        );
    }
    body.push_str("</table>");
    layout(&title, &body)
}

/// Add or edit form with an author select
pub fn form(mode: FormMode, form: &BookForm, authors: &[Author], errors: &FieldErrors) -> String {
    let author_options = options(
        authors.iter().map(|a| (a.id, a.name.as_str())),
        form.author_id,
        "Select an author",
    );
    let body = format!(
        r#"    <form method="post" action="{action}">
        <label for="name">Title</label>
        <input id="name" name="name" value="{name}" maxlength="200">
        {name_errors}
        <label for="genre">Genre</label>
        <input id="genre" name="genre" value="{genre}" maxlength="100">
        {genre_errors}
        <label for="author_id">Author</label>
        <select id="author_id" name="author_id">{author_options}</select>
        {author_errors}
        <p><button type="submit">Save</button> <a href="/books">Cancel</a></p>
    </form>"#,
        action = mode.action("/books"),
        name = escape(&form.name),
        name_errors = errors.render("name"),
        genre = escape(&form.genre),
        genre_errors = errors.render("genre"),
        author_options = author_options,
        author_errors = errors.render("author_id"),
    );
    layout(&format!("{} book", mode.verb()), &body)
}

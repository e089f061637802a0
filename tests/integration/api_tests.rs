//! Live tests against a running server with a migrated database.
//!
//! Start the server, then run: cargo test -- --ignored

use regex::Regex;
use reqwest::{redirect::Policy, Client, StatusCode};

const BASE_URL: &str = "http://localhost:8080";

fn client() -> Client {
    Client::builder()
        .redirect(Policy::none())
        .build()
        .expect("Failed to build client")
}

/// Names must be letters only, so uniqueness comes from a letter suffix.
fn unique_name(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let suffix: String = nanos
        .to_string()
        .chars()
        .rev()
        .take(10)
        .map(|d| (b'a' + d.to_digit(10).unwrap() as u8) as char)
        .collect();
    format!("{} {}", prefix, suffix)
}

async fn get_page(client: &Client, path: &str) -> (StatusCode, String) {
    let response = client
        .get(format!("{}{}", BASE_URL, path))
        .send()
        .await
        .expect("Failed to send request");
    let status = response.status();
    (status, response.text().await.expect("Failed to read body"))
}

async fn post_form(client: &Client, path: &str, form: &[(&str, &str)]) -> (StatusCode, String) {
    let response = client
        .post(format!("{}{}", BASE_URL, path))
        .form(form)
        .send()
        .await
        .expect("Failed to send request");
    let status = response.status();
    (status, response.text().await.expect("Failed to read body"))
}

/// Id of the row whose first cell is `label`, read from its edit link
fn row_id(html: &str, section: &str, label: &str) -> Option<i64> {
    let pattern = format!(
        r#"<tr><td>{}</td>.*?href="/{}/edit/(\d+)""#,
        regex::escape(label),
        section
    );
    Regex::new(&pattern)
        .unwrap()
        .captures(html)
        .and_then(|c| c[1].parse().ok())
}

async fn create_author(client: &Client, name: &str) -> i64 {
    let (status, _) = post_form(client, "/authors/add", &[("name", name)]).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    let (_, html) = get_page(client, "/authors").await;
    row_id(&html, "authors", name).expect("Author not listed")
}

async fn create_book(client: &Client, name: &str, author_id: i64) -> i64 {
    let author = author_id.to_string();
    let (status, _) = post_form(
        client,
        "/books/add",
        &[("name", name), ("genre", "novel"), ("author_id", &author)],
    )
    .await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    let (_, html) = get_page(client, &format!("/books?author_id={}", author_id)).await;
    row_id(&html, "books", name).expect("Book not listed")
}

async fn create_comment(client: &Client, reader: &str, rating: &str, book_id: i64) -> StatusCode {
    let book = book_id.to_string();
    let (status, _) = post_form(
        client,
        "/comments/add",
        &[("reader", reader), ("rating", rating), ("book_id", &book)],
    )
    .await;
    status
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = client();
    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_readiness_reaches_database() {
    let (status, body) = get_page(&client(), "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("ready"));
}

#[tokio::test]
#[ignore]
async fn test_duplicate_author_name_is_rejected() {
    let client = client();
    let name = unique_name("Duplicate");
    let id = create_author(&client, &name).await;

    let (status, html) = post_form(&client, "/authors/add", &[("name", &name)]).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(html.contains("already exists!"));

    // Original record untouched, and not duplicated
    let (_, list) = get_page(&client, "/authors").await;
    assert_eq!(row_id(&list, "authors", &name), Some(id));
    assert_eq!(list.matches(&format!("<td>{}</td>", name)).count(), 1);
}

#[tokio::test]
#[ignore]
async fn test_renaming_onto_existing_name_is_rejected() {
    let client = client();
    let first = unique_name("First");
    let second = unique_name("Second");
    create_author(&client, &first).await;
    let second_id = create_author(&client, &second).await;

    let (status, _) = post_form(
        &client,
        &format!("/authors/edit/{}", second_id),
        &[("name", &first)],
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, list) = get_page(&client, "/authors").await;
    assert_eq!(row_id(&list, "authors", &second), Some(second_id));
}

#[tokio::test]
#[ignore]
async fn test_deleting_author_cascades_to_books_and_comments() {
    let client = client();
    let author_id = create_author(&client, &unique_name("Cascade")).await;
    let book_name = unique_name("Cascading book");
    let book_id = create_book(&client, &book_name, author_id).await;
    assert_eq!(create_comment(&client, "Cascade Reader", "4", book_id).await, StatusCode::SEE_OTHER);

    let (status, _) = get_page(&client, &format!("/authors/delete/{}", author_id)).await;
    assert_eq!(status, StatusCode::SEE_OTHER);

    let (status, _) = get_page(&client, &format!("/books/edit/{}", book_id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, comments) = get_page(&client, &format!("/comments?book_id={}", book_id)).await;
    assert!(comments.contains("No comments."));
}

#[tokio::test]
#[ignore]
async fn test_rating_out_of_range_is_not_persisted() {
    let client = client();
    let author_id = create_author(&client, &unique_name("Rated")).await;
    let book_id = create_book(&client, &unique_name("Rated book"), author_id).await;

    for rating in ["0", "6", ""] {
        assert_eq!(
            create_comment(&client, "Picky Reader", rating, book_id).await,
            StatusCode::UNPROCESSABLE_ENTITY,
            "rating {:?}",
            rating
        );
    }

    let (_, comments) = get_page(&client, &format!("/comments?book_id={}", book_id)).await;
    assert!(comments.contains("No comments."));
}

#[tokio::test]
#[ignore]
async fn test_books_by_author_lists_only_that_author() {
    let client = client();
    let first = create_author(&client, &unique_name("Owner")).await;
    let second = create_author(&client, &unique_name("Other")).await;
    let mine = unique_name("Mine");
    let theirs = unique_name("Theirs");
    create_book(&client, &mine, first).await;
    create_book(&client, &theirs, second).await;

    let (_, html) = get_page(&client, &format!("/books?author_id={}", first)).await;
    assert!(html.contains(&mine));
    assert!(!html.contains(&theirs));
}

#[tokio::test]
#[ignore]
async fn test_edit_preserves_id() {
    let client = client();
    let author_id = create_author(&client, &unique_name("Before")).await;
    let renamed = unique_name("After");

    let (status, _) = post_form(
        &client,
        &format!("/authors/edit/{}", author_id),
        &[("name", &renamed)],
    )
    .await;
    assert_eq!(status, StatusCode::SEE_OTHER);

    let (_, list) = get_page(&client, "/authors").await;
    assert_eq!(row_id(&list, "authors", &renamed), Some(author_id));
}

#[tokio::test]
#[ignore]
async fn test_book_with_unknown_author_is_rejected() {
    let (status, html) = post_form(
        &client(),
        "/books/add",
        &[("name", "Orphan"), ("author_id", "999999999")],
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(html.contains("Selected author does not exist"));
}

#[tokio::test]
#[ignore]
async fn test_deleting_book_cascades_to_comments() {
    let client = client();
    let author_id = create_author(&client, &unique_name("Keeper")).await;
    let book_name = unique_name("Doomed book");
    let book_id = create_book(&client, &book_name, author_id).await;
    assert_eq!(create_comment(&client, "Loyal Reader", "5", book_id).await, StatusCode::SEE_OTHER);

    let (status, _) = get_page(&client, &format!("/books/delete/{}", book_id)).await;
    assert_eq!(status, StatusCode::SEE_OTHER);

    let (_, comments) = get_page(&client, &format!("/comments?book_id={}", book_id)).await;
    assert!(comments.contains("No comments."));

    // The author survives its book
    let (status, _) = get_page(&client, &format!("/authors/edit/{}", author_id)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
#[ignore]
async fn test_book_edit_preserves_id_and_reassigns_author() {
    let client = client();
    let first = create_author(&client, &unique_name("Former")).await;
    let second = create_author(&client, &unique_name("Latter")).await;
    let book_id = create_book(&client, &unique_name("Moving book"), first).await;
    let renamed = unique_name("Moved book");

    let author = second.to_string();
    let (status, _) = post_form(
        &client,
        &format!("/books/edit/{}", book_id),
        &[("name", &renamed), ("genre", ""), ("author_id", &author)],
    )
    .await;
    assert_eq!(status, StatusCode::SEE_OTHER);

    let (_, theirs) = get_page(&client, &format!("/books?author_id={}", second)).await;
    assert_eq!(row_id(&theirs, "books", &renamed), Some(book_id));

    let (_, mine) = get_page(&client, &format!("/books?author_id={}", first)).await;
    assert!(mine.contains("No books."));
}

#[tokio::test]
#[ignore]
async fn test_comment_edit_preserves_id_and_changes_rating() {
    let client = client();
    let author_id = create_author(&client, &unique_name("Reviewed")).await;
    let book_id = create_book(&client, &unique_name("Reviewed book"), author_id).await;
    let reader = unique_name("Reader");
    assert_eq!(create_comment(&client, &reader, "1", book_id).await, StatusCode::SEE_OTHER);

    let path = format!("/comments?book_id={}", book_id);
    let (_, before) = get_page(&client, &path).await;
    let comment_id = row_id(&before, "comments", &reader).expect("Comment not listed");

    let book = book_id.to_string();
    let (status, _) = post_form(
        &client,
        &format!("/comments/edit/{}", comment_id),
        &[("reader", &reader), ("rating", "4"), ("book_id", &book)],
    )
    .await;
    assert_eq!(status, StatusCode::SEE_OTHER);

    let (_, after) = get_page(&client, &path).await;
    assert_eq!(row_id(&after, "comments", &reader), Some(comment_id));
    assert!(after.contains(&format!("<tr><td>{}</td><td>4</td>", reader)));
}

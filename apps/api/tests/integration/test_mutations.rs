use super::helpers::{assert_redirect, expect_status, get, post_form, read_text, spawn_app};
use axum::http::StatusCode;
use uuid::Uuid;

#[tokio::test]
async fn new_book_form_is_blank() {
    let Some(app) = spawn_app().await else {
        return;
    };

    let body = read_text(expect_status(get(&app.app, "/books/new").await, StatusCode::OK).await).await;
    assert!(body.contains("New Book"));
    assert!(body.contains("action=\"/books/new\""));
    assert!(!body.contains("Oooops!"));
}

#[tokio::test]
async fn valid_submission_creates_book_and_redirects() {
    let Some(app) = spawn_app().await else {
        return;
    };

    let res = post_form(
        &app.app,
        "/books/new",
        "title=Dune&author=Frank+Herbert&genre=Science+Fiction&year=1965",
    )
    .await;
    assert_redirect(&res, "/books");

    let books = app.all().await;
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title, "Dune");
    assert_eq!(books[0].author, "Frank Herbert");
    assert_eq!(books[0].genre.as_deref(), Some("Science Fiction"));
    assert_eq!(books[0].year, Some(1965));

    let listing = read_text(get(&app.app, "/books/page/1").await).await;
    assert!(listing.contains("Dune"));
}

#[tokio::test]
async fn missing_required_field_rerenders_form_without_saving() {
    let Some(app) = spawn_app().await else {
        return;
    };

    let res = post_form(&app.app, "/books/new", "title=&author=Frank+Herbert&genre=Epic").await;
    let body = read_text(expect_status(res, StatusCode::OK).await).await;

    assert!(body.contains("Please provide a title"));
    assert!(body.contains("value=\"Frank Herbert\""));
    assert!(body.contains("value=\"Epic\""));
    assert!(app.all().await.is_empty());
}

#[tokio::test]
async fn malformed_year_is_a_field_error() {
    let Some(app) = spawn_app().await else {
        return;
    };

    let res = post_form(&app.app, "/books/new", "title=Dune&author=Frank+Herbert&year=soon").await;
    let body = read_text(expect_status(res, StatusCode::OK).await).await;

    assert!(body.contains("Year must be a number of up to four digits"));
    assert!(app.all().await.is_empty());
}

#[tokio::test]
async fn existing_book_opens_prefilled_update_form() {
    let Some(app) = spawn_app().await else {
        return;
    };
    let book = app.seed("Dune", "Frank Herbert", None, Some("1965")).await;

    let res = get(&app.app, &format!("/books/{}", book.id)).await;
    let body = read_text(expect_status(res, StatusCode::OK).await).await;

    assert!(body.contains("<title>Dune</title>"));
    assert!(body.contains("value=\"Dune\""));
    assert!(body.contains("value=\"1965\""));
    assert!(body.contains(&format!("action=\"/books/{}\"", book.id)));
}

#[tokio::test]
async fn unknown_book_page_is_not_found() {
    let Some(app) = spawn_app().await else {
        return;
    };

    for uri in [format!("/books/{}", Uuid::now_v7()), "/books/42".to_string()] {
        let body = read_text(expect_status(get(&app.app, &uri).await, StatusCode::NOT_FOUND).await).await;
        assert!(body.contains("Books does not exist"), "{uri}");
    }
}

#[tokio::test]
async fn update_changes_fields_and_redirects() {
    let Some(app) = spawn_app().await else {
        return;
    };
    let book = app.seed("Dune", "Frank Herbert", None, None).await;

    let res = post_form(
        &app.app,
        &format!("/books/{}", book.id),
        "title=Dune+Messiah&author=Frank+Herbert&genre=&year=1969",
    )
    .await;
    assert_redirect(&res, "/books");

    let stored = app.get(book.id).await.expect("book still exists");
    assert_eq!(stored.title, "Dune Messiah");
    assert_eq!(stored.year, Some(1969));
    assert_eq!(stored.created_at, book.created_at);
}

#[tokio::test]
async fn invalid_update_keeps_book_and_posts_back_to_same_id() {
    let Some(app) = spawn_app().await else {
        return;
    };
    let book = app.seed("Dune", "Frank Herbert", None, None).await;

    let res = post_form(&app.app, &format!("/books/{}", book.id), "title=Dune&author=").await;
    let body = read_text(expect_status(res, StatusCode::OK).await).await;

    assert!(body.contains("<title>Edit Book</title>"));
    assert!(body.contains("Please provide an author"));
    assert!(body.contains(&format!("action=\"/books/{}\"", book.id)));
    assert_eq!(app.get(book.id).await.expect("book kept").author, "Frank Herbert");
}

#[tokio::test]
async fn update_of_unknown_book_is_bare_not_found() {
    let Some(app) = spawn_app().await else {
        return;
    };

    for uri in [format!("/books/{}", Uuid::now_v7()), "/books/42".to_string()] {
        let res = post_form(&app.app, &uri, "title=Dune&author=Frank+Herbert").await;
        let body = read_text(expect_status(res, StatusCode::NOT_FOUND).await).await;
        assert!(body.is_empty(), "{uri} should have no body, got {body:?}");
    }
    assert!(app.all().await.is_empty());
}

#[tokio::test]
async fn delete_removes_exactly_that_book() {
    let Some(app) = spawn_app().await else {
        return;
    };
    let doomed = app.seed("Doomed", "First Author", None, None).await;
    let kept = app.seed("Kept", "Second Author", None, None).await;

    let res = post_form(&app.app, &format!("/books/{}/delete", doomed.id), "").await;
    assert_redirect(&res, "/books");

    let remaining = app.all().await;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept.id);

    let listing = read_text(get(&app.app, "/books/page/1").await).await;
    assert!(!listing.contains("Doomed"));
    assert!(listing.contains("Kept"));
}

#[tokio::test]
async fn delete_of_unknown_book_is_bare_not_found() {
    let Some(app) = spawn_app().await else {
        return;
    };
    app.seed("Survivor", "Someone", None, None).await;

    let res = post_form(&app.app, &format!("/books/{}/delete", Uuid::now_v7()), "").await;
    let body = read_text(expect_status(res, StatusCode::NOT_FOUND).await).await;

    assert!(body.is_empty());
    assert_eq!(app.all().await.len(), 1);
}

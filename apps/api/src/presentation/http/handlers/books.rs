//! Catalog pages: listing, search and the book forms.
//!
//! Successful writes redirect to `/books`. Validation failures re-render the
//! originating form with the submitted values. Update and delete of an
//! unknown id answer with a bare 404 and no page. Malformed query strings and
//! form bodies are rejected through the generic error page.

use crate::{
    application::{
        manage_book::dto::{BookForm, BookMutation},
        search_books::dto::{SearchOutcome, SearchRequest},
    },
    domain::shared::pagination::PageRequest,
    presentation::http::{
        errors::AppError,
        extract::{AppForm, AppQuery},
        handlers::pages::PAGE_NOT_FOUND_MESSAGE,
        state::AppState,
        views::{BooksView, NewBookView, UpdateBookView, render},
    },
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use tracing::{debug, instrument};
use uuid::Uuid;

pub const NO_MATCH_MESSAGE: &str = "No match found. Search again!";
pub const MISSING_BOOK_MESSAGE: &str = "Books does not exist";

const FIRST_PAGE: &str = "/books/page/1";
const LISTING: &str = "/books";

fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}

fn bare_not_found() -> Response {
    StatusCode::NOT_FOUND.into_response()
}

pub async fn redirect_to_first_page() -> Redirect {
    Redirect::to(FIRST_PAGE)
}

#[instrument(skip(state))]
pub async fn list_books(
    State(state): State<AppState>,
    Path(page): Path<String>,
) -> Result<Html<String>, AppError> {
    let page = PageRequest::parse(&page)
        .ok_or_else(|| AppError::NotFound(PAGE_NOT_FOUND_MESSAGE.into()))?;

    let listing = state.list_books().execute(page).await?;
    render(&BooksView::listing(&listing))
}

#[instrument(skip(state, request))]
pub async fn search_books(
    State(state): State<AppState>,
    AppQuery(request): AppQuery<SearchRequest>,
) -> Result<Response, AppError> {
    match state.search_books().execute(request).await? {
        SearchOutcome::EmptyQuery => Ok(Redirect::to(FIRST_PAGE).into_response()),
        SearchOutcome::Found(results) => Ok(render(&BooksView::search(&results))?.into_response()),
        SearchOutcome::NoMatch => Err(AppError::NotFound(NO_MATCH_MESSAGE.into())),
    }
}

/// `GET /books/books` refers to a view by path instead of by name, so it
/// always fails with the generic error page.
pub async fn legacy_books_view() -> Result<Html<String>, AppError> {
    Err(AppError::Internal(
        "view reference \"/books\" does not name a template".into(),
    ))
}

pub async fn new_book_form() -> Result<Html<String>, AppError> {
    render(&NewBookView::blank())
}

#[instrument(skip(state, form))]
pub async fn create_book(
    State(state): State<AppState>,
    AppForm(form): AppForm<BookForm>,
) -> Result<Response, AppError> {
    match state.manage_book().create(&form).await? {
        BookMutation::Saved(_) => Ok(Redirect::to(LISTING).into_response()),
        BookMutation::Invalid(errors) => {
            Ok(render(&NewBookView::with_errors(form, errors))?.into_response())
        }
        BookMutation::Missing => Ok(bare_not_found()),
    }
}

#[instrument(skip(state))]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let book = match parse_id(&id) {
        Some(book_id) => state.manage_book().find(book_id).await?,
        None => {
            debug!("Malformed book id {:?}", id);
            None
        }
    }
    .ok_or_else(|| AppError::NotFound(MISSING_BOOK_MESSAGE.into()))?;

    render(&UpdateBookView::editing(&book))
}

#[instrument(skip(state, form))]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppForm(form): AppForm<BookForm>,
) -> Result<Response, AppError> {
    let Some(book_id) = parse_id(&id) else {
        return Ok(bare_not_found());
    };

    match state.manage_book().update(book_id, &form).await? {
        BookMutation::Saved(_) => Ok(Redirect::to(LISTING).into_response()),
        BookMutation::Invalid(errors) => {
            Ok(render(&UpdateBookView::with_errors(book_id, form, errors))?.into_response())
        }
        BookMutation::Missing => Ok(bare_not_found()),
    }
}

#[instrument(skip(state))]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let Some(book_id) = parse_id(&id) else {
        return Ok(bare_not_found());
    };

    match state.manage_book().delete(book_id).await? {
        Some(_) => Ok(Redirect::to(LISTING).into_response()),
        None => Ok(bare_not_found()),
    }
}

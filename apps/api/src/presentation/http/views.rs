//! Server-rendered pages.
//!
//! Each view is an `askama` template compiled from `templates/`. Handlers
//! build the view from use-case output and pass it to [`render`].

use crate::{
    application::{
        list_books::dto::BookListing, manage_book::dto::BookForm,
        search_books::dto::SearchResults,
    },
    domain::book::{entity::Book, value_objects::FieldError},
    presentation::http::errors::AppError,
};
use askama::Template;
use axum::response::Html;
use uuid::Uuid;

pub fn render<T: Template>(view: &T) -> Result<Html<String>, AppError> {
    view.render()
        .map(Html)
        .map_err(|e| AppError::Internal(format!("Template rendering failed: {}", e)))
}

/// A book row in the listing table. Missing values render as blanks.
#[derive(Debug, Clone)]
pub struct BookSummary {
    pub id: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub year: String,
}

impl From<&Book> for BookSummary {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.to_string(),
            title: book.title.clone(),
            author: book.author.clone(),
            genre: book.genre.clone().unwrap_or_default(),
            year: book.year.map(|y| y.to_string()).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub number: i64,
    pub current: bool,
}

pub fn page_links(total_pages: i64, current: Option<i64>) -> Vec<PageLink> {
    (1..=total_pages)
        .map(|number| PageLink {
            number,
            current: current == Some(number),
        })
        .collect()
}

#[derive(Template)]
#[template(path = "books.html")]
pub struct BooksView {
    pub title: String,
    pub books: Vec<BookSummary>,
    /// Empty on the plain listing.
    pub search: String,
    pub pages: Vec<PageLink>,
}

impl BooksView {
    pub fn listing(listing: &BookListing) -> Self {
        Self {
            title: "Books".to_string(),
            books: listing.books.iter().map(BookSummary::from).collect(),
            search: String::new(),
            pages: page_links(listing.total_pages, Some(listing.page_number)),
        }
    }

    pub fn search(results: &SearchResults) -> Self {
        Self {
            title: "Books".to_string(),
            books: results.books.iter().map(BookSummary::from).collect(),
            search: results.search.clone(),
            pages: page_links(results.total_pages, None),
        }
    }
}

#[derive(Template)]
#[template(path = "new-book.html")]
pub struct NewBookView {
    pub title: String,
    pub book: BookForm,
    pub errors: Vec<FieldError>,
}

impl NewBookView {
    pub fn blank() -> Self {
        Self::with_errors(BookForm::default(), Vec::new())
    }

    pub fn with_errors(book: BookForm, errors: Vec<FieldError>) -> Self {
        Self {
            title: "New Book".to_string(),
            book,
            errors,
        }
    }
}

#[derive(Template)]
#[template(path = "update-book.html")]
pub struct UpdateBookView {
    pub title: String,
    /// Target of the update and delete forms.
    pub book_id: String,
    pub book: BookForm,
    pub errors: Vec<FieldError>,
}

impl UpdateBookView {
    pub fn editing(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            book_id: book.id.to_string(),
            book: BookForm::from(book),
            errors: Vec::new(),
        }
    }

    /// Re-presents submitted fields; `book_id` is the id from the request path.
    pub fn with_errors(book_id: Uuid, book: BookForm, errors: Vec<FieldError>) -> Self {
        Self {
            title: "Edit Book".to_string(),
            book_id: book_id.to_string(),
            book,
            errors,
        }
    }
}

#[derive(Template)]
#[template(path = "page-not-found.html")]
pub struct NotFoundView {
    pub title: String,
    pub message: String,
}

#[derive(Template)]
#[template(path = "errors.html")]
pub struct ErrorView {
    pub title: String,
    pub message: String,
    pub status: u16,
}

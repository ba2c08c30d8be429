use crate::{
    application::{
        list_books::use_case::ListBooksUseCase, manage_book::use_case::ManageBookUseCase,
        search_books::use_case::SearchBooksUseCase,
    },
    config::Config,
    domain::book::repository::BookRepository,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub books: Arc<dyn BookRepository>,
    pub config: Config,
}

impl AppState {
    pub fn new(books: Arc<dyn BookRepository>, config: Config) -> Self {
        Self { books, config }
    }

    pub fn list_books(&self) -> ListBooksUseCase {
        ListBooksUseCase::new(self.books.clone())
    }

    pub fn search_books(&self) -> SearchBooksUseCase {
        SearchBooksUseCase::new(self.books.clone())
    }

    pub fn manage_book(&self) -> ManageBookUseCase {
        ManageBookUseCase::new(self.books.clone())
    }
}

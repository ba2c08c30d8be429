use super::dto::BookListing;
use crate::domain::{
    book::{errors::DomainError, repository::BookRepository},
    shared::pagination::PageRequest,
};
use std::sync::Arc;
use tracing::{debug, instrument};

pub struct ListBooksUseCase {
    repository: Arc<dyn BookRepository>,
}

impl ListBooksUseCase {
    pub fn new(repository: Arc<dyn BookRepository>) -> Self {
        Self { repository }
    }

    /// Loads one page of books, newest first.
    ///
    /// A page past the end yields an empty listing rather than an error.
    #[instrument(skip(self), fields(page = page.number))]
    pub async fn execute(&self, page: PageRequest) -> Result<BookListing, DomainError> {
        let total = self.repository.count().await?;
        let window = page.paginate(total);
        let books = self.repository.find_page(page.size, window.offset).await?;

        debug!(
            "Listing page {} of {} with {} books",
            page.number,
            window.total_pages,
            books.len()
        );

        Ok(BookListing {
            books,
            total_pages: window.total_pages,
            page_number: page.number,
        })
    }
}

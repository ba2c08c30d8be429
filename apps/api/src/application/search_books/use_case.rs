use super::dto::{SearchOutcome, SearchRequest, SearchResults};
use crate::domain::{
    book::{errors::DomainError, repository::BookRepository, search_filter::SearchFilter},
    shared::pagination::{BOOKS_PER_PAGE, paginate},
};
use std::sync::Arc;
use tracing::{debug, instrument};

pub struct SearchBooksUseCase {
    repository: Arc<dyn BookRepository>,
}

impl SearchBooksUseCase {
    pub fn new(repository: Arc<dyn BookRepository>) -> Self {
        Self { repository }
    }

    /// Matches the query against title, author, genre and year.
    ///
    /// Results are not paginated. The reported page count is that of the
    /// whole catalog so the listing's page links keep working.
    #[instrument(skip(self, request), fields(query_len = request.search.len()))]
    pub async fn execute(&self, request: SearchRequest) -> Result<SearchOutcome, DomainError> {
        if request.search.is_empty() {
            debug!("Empty search query, skipping lookup");
            return Ok(SearchOutcome::EmptyQuery);
        }

        let total = self.repository.count().await?;
        let total_pages = paginate(total, 1, BOOKS_PER_PAGE).total_pages;

        let filter = SearchFilter::new(&request.search);
        let books = self.repository.find_matching(&filter).await?;
        debug!("Search matched {} books", books.len());

        if books.is_empty() {
            return Ok(SearchOutcome::NoMatch);
        }

        Ok(SearchOutcome::Found(SearchResults {
            books,
            search: request.search,
            total_pages,
        }))
    }
}

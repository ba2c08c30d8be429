use crate::domain::book::entity::Book;
use serde::Serialize;

/// One page of the catalog listing.
#[derive(Debug, Clone, Serialize)]
pub struct BookListing {
    pub books: Vec<Book>,
    pub total_pages: i64,
    pub page_number: i64,
}

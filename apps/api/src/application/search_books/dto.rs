use crate::domain::book::entity::Book;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub search: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    pub books: Vec<Book>,
    pub search: String,
    /// Page count of the whole catalog, not of `books`.
    pub total_pages: i64,
}

#[derive(Debug, Clone)]
pub enum SearchOutcome {
    /// The query was empty; callers send the user back to the first page.
    EmptyQuery,
    Found(SearchResults),
    NoMatch,
}

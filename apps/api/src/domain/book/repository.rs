use super::entity::Book;
use super::errors::DomainError;
use super::search_filter::SearchFilter;
use super::value_objects::{BookDraft, FieldError};
use async_trait::async_trait;
use uuid::Uuid;

/// Result of a create or update that reached the persistence layer.
#[derive(Debug, Clone, PartialEq)]
pub enum WriteOutcome {
    /// The row was written; carries the stored book.
    Saved(Book),
    /// The draft failed validation and nothing was written.
    Invalid(Vec<FieldError>),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    async fn count(&self) -> Result<i64, DomainError>;
    /// Books ordered newest first.
    async fn find_page(&self, limit: i64, offset: i64) -> Result<Vec<Book>, DomainError>;
    /// Every book matching the filter, newest first, without a limit.
    async fn find_matching(&self, filter: &SearchFilter) -> Result<Vec<Book>, DomainError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Book>, DomainError>;
    async fn create(&self, draft: &BookDraft) -> Result<WriteOutcome, DomainError>;
    /// Fails with [`DomainError::NotFound`] if the row disappeared.
    async fn update(&self, id: Uuid, draft: &BookDraft) -> Result<WriteOutcome, DomainError>;
    async fn delete(&self, id: Uuid) -> Result<(), DomainError>;
}

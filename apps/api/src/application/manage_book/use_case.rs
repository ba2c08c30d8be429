use super::dto::{BookForm, BookMutation};
use crate::domain::book::{
    entity::Book,
    errors::DomainError,
    repository::{BookRepository, WriteOutcome},
    value_objects::BookDraft,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

/// Create, read, update and delete of a single book.
///
/// Validation failures are returned as [`BookMutation::Invalid`]; every
/// other failure is a [`DomainError`] for the caller to propagate.
pub struct ManageBookUseCase {
    repository: Arc<dyn BookRepository>,
}

impl ManageBookUseCase {
    pub fn new(repository: Arc<dyn BookRepository>) -> Self {
        Self { repository }
    }

    pub async fn find(&self, id: Uuid) -> Result<Option<Book>, DomainError> {
        self.repository.find_by_id(id).await
    }

    #[instrument(skip(self, form))]
    pub async fn create(&self, form: &BookForm) -> Result<BookMutation, DomainError> {
        let draft = BookDraft::from(form);
        Ok(match self.repository.create(&draft).await? {
            WriteOutcome::Saved(book) => {
                info!(book_id = %book.id, "Book created");
                BookMutation::Saved(book)
            }
            WriteOutcome::Invalid(errors) => {
                warn!(errors = errors.len(), "Rejected invalid new book");
                BookMutation::Invalid(errors)
            }
        })
    }

    #[instrument(skip(self, form), fields(book_id = %id))]
    pub async fn update(&self, id: Uuid, form: &BookForm) -> Result<BookMutation, DomainError> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Ok(BookMutation::Missing);
        }

        let draft = BookDraft::from(form);
        Ok(match self.repository.update(id, &draft).await {
            Ok(WriteOutcome::Saved(book)) => {
                info!("Book updated");
                BookMutation::Saved(book)
            }
            Ok(WriteOutcome::Invalid(errors)) => {
                warn!(errors = errors.len(), "Rejected invalid book update");
                BookMutation::Invalid(errors)
            }
            // Deleted after the lookup above.
            Err(DomainError::NotFound(_)) => BookMutation::Missing,
            Err(e) => return Err(e),
        })
    }

    /// Removes the book and returns it, or `None` when it does not exist.
    #[instrument(skip(self), fields(book_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<Option<Book>, DomainError> {
        let Some(book) = self.repository.find_by_id(id).await? else {
            return Ok(None);
        };

        self.repository.delete(id).await?;
        info!("Book deleted");
        Ok(Some(book))
    }
}

use thiserror::Error;

/// Failures raised by the book persistence layer.
///
/// Validation problems are not errors here: they come back as
/// [`WriteOutcome::Invalid`](super::repository::WriteOutcome::Invalid).
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Infrastructure error: {0}")]
    InfrastructureError(String),
}

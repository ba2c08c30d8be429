//! HTTP error handling and response conversion.
//!
//! Every failure that leaves a handler ends up here. A not-found condition is
//! rendered as the "page not found" view carrying its own message; anything
//! else is logged with its detail and answered with the generic error view,
//! whose message never exposes that detail.
//!
//! Lookups that should answer with a bare 404 and no page (update and delete
//! of an unknown book) do not go through [`AppError`] at all.

use crate::{
    domain::book::errors::DomainError,
    presentation::http::views::{self, ErrorView, NotFoundView},
};
use axum::{
    extract::rejection::{FormRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

/// Message shown for every failure that is not a not-found condition.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went really wrong";

/// Application-level errors returned from handlers.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found (404). The message is shown to the user.
    NotFound(String),

    /// Database operation failed (500).
    Database(String),

    /// Unclassified internal error (500).
    Internal(String),

    /// The request could not be extracted (malformed query or form body).
    /// Keeps the extractor's status; the detail is only logged.
    Rejected { status: StatusCode, detail: String },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::Database(msg) => write!(f, "Database error: {}", msg),
            Self::Internal(msg) => write!(f, "Internal error: {}", msg),
            Self::Rejected { status, detail } => {
                write!(f, "Rejected request ({}): {}", status, detail)
            }
        }
    }
}

impl AppError {
    /// Get the appropriate HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Rejected { status, .. } => *status,
        }
    }

    /// Get a user-safe error message (without implementation details).
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound(msg) => msg.clone(),
            Self::Database(_) | Self::Internal(_) | Self::Rejected { .. } => {
                GENERIC_ERROR_MESSAGE.into()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.user_message();

        let page = match &self {
            Self::NotFound(msg) => {
                tracing::warn!("{}", msg);
                views::render(&NotFoundView {
                    title: "Page Not Found".to_string(),
                    message: message.clone(),
                })
            }
            Self::Database(_) | Self::Internal(_) | Self::Rejected { .. } => {
                if status.is_server_error() {
                    tracing::error!("error={}", self);
                } else {
                    tracing::warn!("error={}", self);
                }
                views::render(&ErrorView {
                    title: "Server Error".to_string(),
                    message: message.clone(),
                    status: status.as_u16(),
                })
            }
        };

        match page {
            Ok(html) => (status, html).into_response(),
            Err(render_error) => {
                tracing::error!("error={}", render_error);
                (status, message).into_response()
            }
        }
    }
}

// === Domain Error Conversion ===

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound(msg) => AppError::NotFound(msg),
            DomainError::InfrastructureError(msg) => AppError::Database(msg),
        }
    }
}

// === Extractor Rejections ===

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

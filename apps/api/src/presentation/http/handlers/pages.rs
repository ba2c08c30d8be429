use crate::presentation::http::errors::AppError;
use axum::response::Redirect;

pub const PAGE_NOT_FOUND_MESSAGE: &str = "Your page was not found!";

pub async fn home() -> Redirect {
    Redirect::to("/books")
}

/// Fallback for every request no route claims.
pub async fn not_found() -> AppError {
    AppError::NotFound(PAGE_NOT_FOUND_MESSAGE.into())
}

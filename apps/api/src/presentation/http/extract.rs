//! Request extractors whose rejections render through [`AppError`].

use crate::presentation::http::errors::AppError;
use axum::extract::{FromRequest, FromRequestParts};

/// `application/x-www-form-urlencoded` body.
#[derive(FromRequest)]
#[from_request(via(axum::Form), rejection(AppError))]
pub struct AppForm<T>(pub T);

/// URL query string.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

//! Extractors whose rejections are reported as `AppError`.
//!
//! They wrap axum's `Json`, `Path` and `Query` so a malformed body, path segment or
//! query string answers with the same `{"message": ...}` body as every other error.

use axum::extract::{FromRequest, FromRequestParts};

use crate::server::error::AppError;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

//! JSON request body extractor answering malformed bodies with `ErrorDto`.

use axum::extract::FromRequest;

use crate::server::error::AppError;

/// `axum::Json` whose rejection is converted into `AppError::JsonErr`, so a body that
/// is not JSON or has a mistyped field gets 400 Bad Request in the usual error shape.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

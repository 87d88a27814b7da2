//! HTTP request handlers.
//!
//! Controllers extract and validate request input, call the matching service and
//! convert the domain result into a DTO. Missing fields are rejected here with
//! 400 Bad Request before any database or NEIS access.

pub mod auth;
pub mod diary;
pub mod personal;
pub mod profile;
pub mod schedule;
pub mod school;
pub mod upload;

use axum::{http::StatusCode, response::IntoResponse};

/// Liveness endpoint.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Server is running", body = String)
    ),
)]
pub async fn index() -> impl IntoResponse {
    (StatusCode::OK, "hello schoolmate")
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The identity provider rejected the assertion (malformed, expired or revoked).
    #[error("Identity provider rejected the ID token")]
    InvalidIdentityToken,

    /// The assertion was issued for another application.
    #[error("ID token audience '{0}' does not match the configured audience")]
    AudienceMismatch(String),

    /// The provider has not verified the email address of the account.
    #[error("ID token email is not verified")]
    UnverifiedEmail,

    /// The verified assertion does not carry an email address.
    #[error("ID token does not contain an email claim")]
    MissingEmail,
}

/// Converts authentication errors into HTTP responses.
///
/// Every variant answers 401 Unauthorized with the same generic message; the
/// specific reason is only logged at debug level to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Login rejected: {}", self);

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: "Unauthorized".to_string(),
            }),
        )
            .into_response()
    }
}

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{LoginDto, LoginResponseDto, SignupDto},
    },
    server::{
        error::AppError, service::identity::IdentityService, state::AppState,
        util::{json::AppJson, parse::require},
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in with an identity provider ID token.
///
/// Verifies the token and registers the email as a student on first login, using the
/// provider's picture as the initial profile photo.
///
/// # Arguments
/// - `state` - Application state containing the student database and identity verifier
/// - `payload` - ID token issued to the client
///
/// # Returns
/// - `200 OK` - Token accepted, with the verified email
/// - `400 Bad Request` - Missing ID token
/// - `401 Unauthorized` - Token rejected by the identity provider
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "User logged in", body = LoginResponseDto),
        (status = 400, description = "Missing ID token", body = ErrorDto),
        (status = 401, description = "Token rejected", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let id_token = require(payload.id_token, "ID token is required")?;

    let service = IdentityService::new(&state.dbs.student, state.identity.as_ref());

    let identity = service.login(&id_token).await?;

    Ok((
        StatusCode::OK,
        Json(LoginResponseDto {
            message: "User logged in".to_string(),
            email: identity.email,
        }),
    ))
}

/// Register an email as a student without a token.
///
/// Registering an existing email leaves it unchanged.
///
/// # Arguments
/// - `state` - Application state containing the student database
/// - `payload` - Email to register
///
/// # Returns
/// - `200 OK` - Email registered
/// - `400 Bad Request` - Missing email
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/signup",
    tag = AUTH_TAG,
    request_body = SignupDto,
    responses(
        (status = 200, description = "Student registered", body = MessageDto),
        (status = 400, description = "Missing email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    AppJson(payload): AppJson<SignupDto>,
) -> Result<impl IntoResponse, AppError> {
    let email = require(payload.email, "Email is required")?;

    let service = IdentityService::new(&state.dbs.student, state.identity.as_ref());

    service.signup(&email).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("User registered successfully")),
    ))
}

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        diary::{DiaryContentDto, DiaryRequestDto},
    },
    server::{
        error::AppError,
        service::diary::DiaryService,
        state::AppState,
        util::{json::AppJson, parse::require},
    },
};

/// Tag for grouping class diary endpoints in OpenAPI documentation
pub static DIARY_TAG: &str = "diary";

const FIELDS_REQUIRED: &str = "Email, date, and content are required";

#[derive(Deserialize)]
pub struct DiaryParams {
    pub email: Option<String>,
    pub date: Option<String>,
}

/// Add a diary entry for the student's class.
///
/// # Arguments
/// - `state` - Application state containing the student and diary databases
/// - `payload` - Author email, date and content
///
/// # Returns
/// - `200 OK` - Entry stored
/// - `400 Bad Request` - Missing field
/// - `404 Not Found` - Unknown student or incomplete profile
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/diary/add",
    tag = DIARY_TAG,
    request_body = DiaryRequestDto,
    responses(
        (status = 200, description = "Diary entry added", body = MessageDto),
        (status = 400, description = "Missing field", body = ErrorDto),
        (status = 404, description = "Unknown student or incomplete profile", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_diary(
    State(state): State<AppState>,
    AppJson(payload): AppJson<DiaryRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let email = require(payload.email, FIELDS_REQUIRED)?;
    let date = require(payload.date, FIELDS_REQUIRED)?;
    let content = require(payload.content, FIELDS_REQUIRED)?;

    let service = DiaryService::new(&state.dbs.student, &state.dbs.diary, state.record_scope);

    service.add(&email, &date, &content).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Diary entry added successfully")),
    ))
}

/// Replace the content of the class diary entry for a date.
///
/// # Arguments
/// - `state` - Application state containing the student and diary databases
/// - `payload` - Author email, date and new content
///
/// # Returns
/// - `200 OK` - Entry updated
/// - `400 Bad Request` - Missing field
/// - `404 Not Found` - Unknown student, incomplete profile or no entry for the date
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/diary/update",
    tag = DIARY_TAG,
    request_body = DiaryRequestDto,
    responses(
        (status = 200, description = "Diary entry updated", body = MessageDto),
        (status = 400, description = "Missing field", body = ErrorDto),
        (status = 404, description = "No entry for the date", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_diary(
    State(state): State<AppState>,
    AppJson(payload): AppJson<DiaryRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let email = require(payload.email, FIELDS_REQUIRED)?;
    let date = require(payload.date, FIELDS_REQUIRED)?;
    let content = require(payload.content, FIELDS_REQUIRED)?;

    let service = DiaryService::new(&state.dbs.student, &state.dbs.diary, state.record_scope);

    service.update(&email, &date, &content).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Diary entry updated successfully")),
    ))
}

/// Get the class diary entry for a date.
///
/// # Arguments
/// - `state` - Application state containing the student and diary databases
/// - `params` - Student email and date
///
/// # Returns
/// - `200 OK` - Content of the first entry for the date
/// - `400 Bad Request` - Missing email or date
/// - `404 Not Found` - Unknown student, incomplete profile or no entry for the date
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/diary",
    tag = DIARY_TAG,
    params(
        ("email" = String, Query, description = "Student email"),
        ("date" = String, Query, description = "Diary date")
    ),
    responses(
        (status = 200, description = "Diary content", body = DiaryContentDto),
        (status = 400, description = "Missing email or date", body = ErrorDto),
        (status = 404, description = "No entry for the date", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_diary(
    State(state): State<AppState>,
    Query(params): Query<DiaryParams>,
) -> Result<impl IntoResponse, AppError> {
    let email = require(params.email, "Email and date are required")?;
    let date = require(params.date, "Email and date are required")?;

    let service = DiaryService::new(&state.dbs.student, &state.dbs.diary, state.record_scope);

    let entry = service.get(&email, &date).await?;

    Ok((
        StatusCode::OK,
        Json(DiaryContentDto {
            content: entry.content,
        }),
    ))
}

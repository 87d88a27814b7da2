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
        profile::{ProfileDto, UpdateProfileDto},
    },
    server::{
        error::AppError,
        model::student::UpdateProfileParam,
        service::profile::ProfileService,
        state::AppState,
        util::{json::AppJson, parse::require},
    },
};

/// Tag for grouping profile endpoints in OpenAPI documentation
pub static PROFILE_TAG: &str = "profile";

#[derive(Deserialize)]
pub struct ProfileParams {
    pub email: Option<String>,
}

/// Get the profile of a student.
///
/// # Arguments
/// - `state` - Application state containing the student database
/// - `params` - Student email
///
/// # Returns
/// - `200 OK` - Profile with an empty name when none is set
/// - `400 Bad Request` - Missing email
/// - `404 Not Found` - No student with that email
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/profile",
    tag = PROFILE_TAG,
    params(
        ("email" = String, Query, description = "Student email")
    ),
    responses(
        (status = 200, description = "Student profile", body = ProfileDto),
        (status = 400, description = "Missing email", body = ErrorDto),
        (status = 404, description = "Profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    Query(params): Query<ProfileParams>,
) -> Result<impl IntoResponse, AppError> {
    let email = require(params.email, "Email is required")?;

    let service = ProfileService::new(&state.dbs.student);

    let student = service.get(&email).await?;

    Ok((StatusCode::OK, Json(student.into_profile_dto())))
}

/// Update the profile of a student.
///
/// Sets name, office, school, grade, class and number in one go. The school context
/// used by the timetable, meal, diary and image endpoints comes from these fields.
///
/// # Arguments
/// - `state` - Application state containing the student database
/// - `payload` - Complete profile
///
/// # Returns
/// - `200 OK` - Profile updated
/// - `400 Bad Request` - Any field missing
/// - `404 Not Found` - No student with that email
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/profile",
    tag = PROFILE_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = MessageDto),
        (status = 400, description = "Missing field", body = ErrorDto),
        (status = 404, description = "Profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    AppJson(payload): AppJson<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = UpdateProfileParam::from_dto(payload)?;

    let service = ProfileService::new(&state.dbs.student);

    service.update(param).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Profile updated successfully")),
    ))
}

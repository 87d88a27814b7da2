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
        personal::{PersonalScheduleDto, PersonalScheduleRequestDto},
    },
    server::{
        error::AppError,
        service::personal_schedule::PersonalScheduleService,
        state::AppState,
        util::{json::AppJson, parse::require},
    },
};

/// Tag for grouping personal schedule endpoints in OpenAPI documentation
pub static PERSONAL_TAG: &str = "personal";

#[derive(Deserialize)]
pub struct EmailParams {
    pub email: Option<String>,
}

/// Fields shared by the add and delete endpoints, all required.
struct ScheduleFields {
    email: String,
    name: String,
    date: String,
}

impl ScheduleFields {
    fn from_dto(payload: PersonalScheduleRequestDto) -> Result<Self, AppError> {
        const MESSAGE: &str = "Email, calendar_name and calendar_date are required";

        Ok(Self {
            email: require(payload.email, MESSAGE)?,
            name: require(payload.calendar_name, MESSAGE)?,
            date: require(payload.calendar_date, MESSAGE)?,
        })
    }
}

/// Add a personal schedule entry.
///
/// The date may be given in any common form and is stored normalized. Adding the same
/// entry twice stores it twice.
///
/// # Arguments
/// - `state` - Application state containing the personal schedule database
/// - `payload` - Email, event name and date
///
/// # Returns
/// - `200 OK` - Entry stored
/// - `400 Bad Request` - Missing field or unrecognizable date
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/personal-addschedule",
    tag = PERSONAL_TAG,
    request_body = PersonalScheduleRequestDto,
    responses(
        (status = 200, description = "Schedule added", body = MessageDto),
        (status = 400, description = "Missing field or invalid date", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_schedule(
    State(state): State<AppState>,
    AppJson(payload): AppJson<PersonalScheduleRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let fields = ScheduleFields::from_dto(payload)?;

    let service = PersonalScheduleService::new(&state.dbs.personal);

    service.add(&fields.email, &fields.name, &fields.date).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Schedule added successfully")),
    ))
}

/// Delete personal schedule entries matching email, name and date.
///
/// Succeeds whether or not anything matched.
///
/// # Arguments
/// - `state` - Application state containing the personal schedule database
/// - `payload` - Email, event name and date
///
/// # Returns
/// - `200 OK` - Matching entries removed
/// - `400 Bad Request` - Missing field or unrecognizable date
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/personal-delschedule",
    tag = PERSONAL_TAG,
    request_body = PersonalScheduleRequestDto,
    responses(
        (status = 200, description = "Schedule deleted", body = MessageDto),
        (status = 400, description = "Missing field or invalid date", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_schedule(
    State(state): State<AppState>,
    AppJson(payload): AppJson<PersonalScheduleRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let fields = ScheduleFields::from_dto(payload)?;

    let service = PersonalScheduleService::new(&state.dbs.personal);

    service
        .delete(&fields.email, &fields.name, &fields.date)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Schedule deleted successfully")),
    ))
}

/// List all personal schedule entries of a student.
///
/// # Arguments
/// - `state` - Application state containing the personal schedule database
/// - `params` - Student email
///
/// # Returns
/// - `200 OK` - Entries in date order with dates as `YYYYMMDD`
/// - `400 Bad Request` - Missing email
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/personaldata",
    tag = PERSONAL_TAG,
    params(
        ("email" = String, Query, description = "Student email")
    ),
    responses(
        (status = 200, description = "Personal schedule entries", body = Vec<PersonalScheduleDto>),
        (status = 400, description = "Missing email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_schedules(
    State(state): State<AppState>,
    Query(params): Query<EmailParams>,
) -> Result<impl IntoResponse, AppError> {
    let email = require(params.email, "Email is required")?;

    let service = PersonalScheduleService::new(&state.dbs.personal);

    let schedules = service.list(&email).await?;

    Ok((
        StatusCode::OK,
        Json(
            schedules
                .into_iter()
                .map(|schedule| schedule.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

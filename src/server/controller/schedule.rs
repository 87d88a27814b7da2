use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{
    model::{api::ErrorDto, schedule::MealPlanDto},
    server::{
        error::AppError,
        model::schedule::DateWindow,
        service::schedule::ScheduleService,
        state::AppState,
        util::parse::{parse_compact_date, parse_loose_date, require},
    },
};

/// Tag for grouping NEIS schedule endpoints in OpenAPI documentation
pub static SCHEDULE_TAG: &str = "schedule";

#[derive(Deserialize)]
pub struct WindowParams {
    pub email: Option<String>,
    /// First day of the window as `YYYYMMDD`.
    pub from: Option<String>,
    /// Last day of the window as `YYYYMMDD`.
    pub to: Option<String>,
}

#[derive(Deserialize)]
pub struct MealParams {
    pub email: Option<String>,
    pub date: Option<String>,
}

/// Get the academic calendar of the student's school.
///
/// Queries the NEIS school schedule over the requested window, defaulting to the
/// configured academic year, and returns the NEIS body as is.
///
/// # Arguments
/// - `state` - Application state containing the student database and NEIS client
/// - `params` - Student email and the optional `from`/`to` window
///
/// # Returns
/// - `200 OK` - NEIS response body, `{}` when NEIS could not be reached
/// - `400 Bad Request` - Missing email, malformed window or window longer than a year
/// - `404 Not Found` - Unknown student or incomplete profile
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/schooldata",
    tag = SCHEDULE_TAG,
    params(
        ("email" = String, Query, description = "Student email"),
        ("from" = Option<String>, Query, description = "Window start as YYYYMMDD (default: January 1st)"),
        ("to" = Option<String>, Query, description = "Window end as YYYYMMDD (default: December 31st)")
    ),
    responses(
        (status = 200, description = "NEIS school schedule body", body = Object),
        (status = 400, description = "Missing email, malformed window or window longer than a year", body = ErrorDto),
        (status = 404, description = "Unknown student or incomplete profile", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_school_calendar(
    State(state): State<AppState>,
    Query(params): Query<WindowParams>,
) -> Result<impl IntoResponse, AppError> {
    let email = require(params.email, "Email is required")?;
    let window = requested_window(
        state.schedule_year,
        params.from.as_deref(),
        params.to.as_deref(),
    )?;

    let service = ScheduleService::new(
        &state.dbs.student,
        state.neis.as_ref(),
        state.neis_department.as_deref(),
    );

    let calendar = service.calendar(&email, window).await?;

    Ok((StatusCode::OK, Json(calendar)))
}

/// Get the weekly timetable of the student's class.
///
/// The window is split into Monday-to-Sunday weeks and each week is fetched from NEIS
/// concurrently. Weeks that fail are returned as empty lists.
///
/// # Arguments
/// - `state` - Application state containing the student database and NEIS client
/// - `params` - Student email and the optional `from`/`to` window
///
/// # Returns
/// - `200 OK` - Object keyed `week1..weekN` in chronological order
/// - `400 Bad Request` - Missing email, malformed window or window longer than a year
/// - `404 Not Found` - Unknown student or incomplete profile
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/timetabledata",
    tag = SCHEDULE_TAG,
    params(
        ("email" = String, Query, description = "Student email"),
        ("from" = Option<String>, Query, description = "Window start as YYYYMMDD (default: January 1st)"),
        ("to" = Option<String>, Query, description = "Window end as YYYYMMDD (default: December 31st)")
    ),
    responses(
        (status = 200, description = "Timetable rows grouped by week", body = Object),
        (status = 400, description = "Missing email, malformed window or window longer than a year", body = ErrorDto),
        (status = 404, description = "Unknown student or incomplete profile", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_timetable(
    State(state): State<AppState>,
    Query(params): Query<WindowParams>,
) -> Result<impl IntoResponse, AppError> {
    let email = require(params.email, "Email is required")?;
    let window = requested_window(
        state.schedule_year,
        params.from.as_deref(),
        params.to.as_deref(),
    )?;

    let service = ScheduleService::new(
        &state.dbs.student,
        state.neis.as_ref(),
        state.neis_department.as_deref(),
    );

    let timetable = service.timetable(&email, window).await?;

    Ok((StatusCode::OK, Json(timetable.into_json())))
}

/// Get breakfast, lunch and dinner served at the student's school on a date.
///
/// # Arguments
/// - `state` - Application state containing the student database and NEIS client
/// - `params` - Student email and the date
///
/// # Returns
/// - `200 OK` - All three meals, empty when NEIS has no data or failed
/// - `400 Bad Request` - Missing email or date
/// - `404 Not Found` - Unknown student or incomplete profile
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/mealdata",
    tag = SCHEDULE_TAG,
    params(
        ("email" = String, Query, description = "Student email"),
        ("date" = String, Query, description = "Day as YYYYMMDD")
    ),
    responses(
        (status = 200, description = "Meals of the day", body = MealPlanDto),
        (status = 400, description = "Missing email or date", body = ErrorDto),
        (status = 404, description = "Unknown student or incomplete profile", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_meals(
    State(state): State<AppState>,
    Query(params): Query<MealParams>,
) -> Result<impl IntoResponse, AppError> {
    let email = require(params.email, "Email is required")?;
    let raw_date = require(params.date, "Date is required")?;
    let date = parse_loose_date(&raw_date)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid date '{}'", raw_date)))?;

    let service = ScheduleService::new(
        &state.dbs.student,
        state.neis.as_ref(),
        state.neis_department.as_deref(),
    );

    let meals = service.meals(&email, date).await?;

    Ok((StatusCode::OK, Json(meals.into_dto())))
}

/// Builds the window from the optional `from`/`to` bounds.
///
/// A missing or blank bound falls back to the start or end of `year`. Windows longer
/// than a year are rejected.
fn requested_window(
    year: i32,
    from: Option<&str>,
    to: Option<&str>,
) -> Result<DateWindow, AppError> {
    let year_window = DateWindow::year(year)
        .ok_or_else(|| AppError::InternalError(format!("Invalid schedule year {}", year)))?;

    let start = match from.filter(|v| !v.trim().is_empty()) {
        Some(value) => window_bound(value)?,
        None => year_window.start,
    };
    let end = match to.filter(|v| !v.trim().is_empty()) {
        Some(value) => window_bound(value)?,
        None => year_window.end,
    };

    DateWindow::new(start, end)
}

fn window_bound(value: &str) -> Result<NaiveDate, AppError> {
    parse_compact_date(value).ok_or_else(|| {
        AppError::BadRequest(format!("Invalid window date '{}', expected YYYYMMDD", value))
    })
}

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        school::{SchoolDto, SchoolListRequestDto},
    },
    server::{
        error::AppError, service::school_directory::SchoolDirectoryService, state::AppState,
        util::{json::AppJson, parse::require},
    },
};

/// Tag for grouping school directory endpoints in OpenAPI documentation
pub static SCHOOL_TAG: &str = "school";

/// List one page of the schools of an education office.
///
/// # Arguments
/// - `state` - Application state containing the directory database
/// - `payload` - Office code, one-based page and page size
///
/// # Returns
/// - `200 OK` - Schools on the page
/// - `400 Bad Request` - Missing or invalid office code, page or limit
/// - `500 Internal Server Error` - Database error, including unknown offices
#[utoipa::path(
    post,
    path = "/getSchools",
    tag = SCHOOL_TAG,
    request_body = SchoolListRequestDto,
    responses(
        (status = 200, description = "Schools on the page", body = Vec<SchoolDto>),
        (status = 400, description = "Invalid office, page or limit", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_schools(
    State(state): State<AppState>,
    AppJson(payload): AppJson<SchoolListRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let office = require(payload.office, "Office, page and limit are required")?;
    let (Some(page), Some(limit)) = (payload.page, payload.limit) else {
        return Err(AppError::BadRequest(
            "Office, page and limit are required".to_string(),
        ));
    };

    let service = SchoolDirectoryService::new(&state.dbs.directory);

    let schools = service.list(&office, page, limit).await?;

    Ok((
        StatusCode::OK,
        Json(
            schools
                .into_iter()
                .map(|school| school.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

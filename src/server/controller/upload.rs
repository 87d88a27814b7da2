use axum::{
    extract::{Multipart, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    model::{
        api::ErrorDto,
        upload::{ImagePathDto, UploadResponseDto},
    },
    server::{
        error::AppError,
        model::{
            record::ImageBinding,
            upload::{ProfilePhoto, UploadedFile},
        },
        service::upload::UploadService,
        state::AppState,
        util::parse::require,
    },
};

/// Tag for grouping upload endpoints in OpenAPI documentation
pub static UPLOAD_TAG: &str = "upload";

/// Header carrying the owner of a profile photo when the form has no `email` field.
static EMAIL_HEADER: &str = "email";

/// Multipart form accepted by the upload endpoints.
///
/// Unknown fields are ignored.
#[derive(Default, ToSchema)]
pub struct UploadForm {
    /// Uploaded file; only its extension is kept.
    #[schema(value_type = String, format = Binary)]
    pub file: Option<UploadedFile>,
    pub email: Option<String>,
    /// Class image date; ignored by the profile photo endpoint.
    pub date: Option<String>,
}

impl UploadForm {
    /// Reads every field of a multipart body.
    async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().map(str::to_owned);
            match name.as_deref() {
                Some("file") => {
                    let file_name = field.file_name().map(str::to_owned).unwrap_or_default();
                    let bytes = field.bytes().await?;
                    form.file = Some(UploadedFile {
                        file_name,
                        bytes: bytes.to_vec(),
                    });
                }
                Some("email") => form.email = Some(field.text().await?),
                Some("date") => form.date = Some(field.text().await?),
                _ => {}
            }
        }

        Ok(form)
    }
}

#[derive(Deserialize)]
pub struct ImageParams {
    pub email: Option<String>,
    pub date: Option<String>,
}

#[derive(Deserialize)]
pub struct PhotoParams {
    pub email: Option<String>,
}

/// Upload an image for the student's class on a date.
///
/// Stores the file and points the class image record for the date at it, creating the
/// record when none exists yet.
///
/// # Arguments
/// - `state` - Application state containing the databases and storage backend
/// - `multipart` - Form with `file`, `email` and `date`
///
/// # Returns
/// - `200 OK` - File stored and bound, with its location
/// - `400 Bad Request` - Missing file, email or date, or malformed body
/// - `404 Not Found` - Unknown student or incomplete profile
/// - `500 Internal Server Error` - Storage or database error
#[utoipa::path(
    post,
    path = "/upload",
    tag = UPLOAD_TAG,
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Image stored", body = UploadResponseDto),
        (status = 400, description = "Missing file, email or date", body = ErrorDto),
        (status = 404, description = "Unknown student or incomplete profile", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_class_image(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let form = UploadForm::read(multipart).await?;
    let email = require(form.email, "Missing required fields")?;
    let date = require(form.date, "Missing required fields")?;
    let file = form
        .file
        .ok_or_else(|| AppError::BadRequest("No file uploaded".to_string()))?;

    let service = UploadService::new(
        &state.dbs.student,
        &state.dbs.image,
        state.storage.as_ref(),
        state.record_scope,
    );

    let (message, file_path) = match service.upload_class_image(&email, &date, file).await? {
        ImageBinding::Updated(path) => ("Image path updated successfully", path),
        ImageBinding::Inserted(path) => ("File uploaded successfully", path),
    };

    Ok((
        StatusCode::OK,
        Json(UploadResponseDto {
            message: message.to_string(),
            file_path,
        }),
    ))
}

/// Get the image location recorded for the student's class on a date.
///
/// # Arguments
/// - `state` - Application state containing the student and image databases
/// - `params` - Student email and date
///
/// # Returns
/// - `200 OK` - Stored image location
/// - `400 Bad Request` - Missing email or date
/// - `404 Not Found` - Unknown student, incomplete profile or no image for the date
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/image",
    tag = UPLOAD_TAG,
    params(
        ("email" = String, Query, description = "Student email"),
        ("date" = String, Query, description = "Image date")
    ),
    responses(
        (status = 200, description = "Image location", body = ImagePathDto),
        (status = 400, description = "Missing email or date", body = ErrorDto),
        (status = 404, description = "No image for the date", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_class_image(
    State(state): State<AppState>,
    Query(params): Query<ImageParams>,
) -> Result<impl IntoResponse, AppError> {
    let email = require(params.email, "Missing required fields")?;
    let date = require(params.date, "Missing required fields")?;

    let service = UploadService::new(
        &state.dbs.student,
        &state.dbs.image,
        state.storage.as_ref(),
        state.record_scope,
    );

    let image_path = service.class_image(&email, &date).await?;

    Ok((StatusCode::OK, Json(ImagePathDto { image_path })))
}

/// Upload a profile photo.
///
/// The owner is taken from the form's `email` field, or from the `email` header when
/// the form has none.
///
/// # Arguments
/// - `state` - Application state containing the student database and storage backend
/// - `headers` - Request headers, consulted for `email`
/// - `multipart` - Form with `file` and optionally `email`
///
/// # Returns
/// - `200 OK` - Photo stored, with its location
/// - `400 Bad Request` - Missing file or email, or malformed body
/// - `404 Not Found` - No student with that email
/// - `500 Internal Server Error` - Storage or database error
#[utoipa::path(
    post,
    path = "/uploadimg",
    tag = UPLOAD_TAG,
    params(
        ("email" = Option<String>, Header, description = "Owner email when the form has no email field")
    ),
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Photo stored", body = UploadResponseDto),
        (status = 400, description = "Missing file or email", body = ErrorDto),
        (status = 404, description = "No student with that email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_profile_photo(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let form = UploadForm::read(multipart).await?;
    let file = form
        .file
        .ok_or_else(|| AppError::BadRequest("No file uploaded".to_string()))?;
    let header_email = headers
        .get(EMAIL_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let email = require(
        form.email.filter(|v| !v.trim().is_empty()).or(header_email),
        "No email provided",
    )?;

    let service = UploadService::new(
        &state.dbs.student,
        &state.dbs.image,
        state.storage.as_ref(),
        state.record_scope,
    );

    let file_path = service.upload_profile_photo(&email, file).await?;

    Ok((
        StatusCode::OK,
        Json(UploadResponseDto {
            message: "Photo URL updated successfully".to_string(),
            file_path,
        }),
    ))
}

/// Get the profile photo of a student.
///
/// Stored photos are returned as bytes. A photo hosted elsewhere, such as the identity
/// provider's picture, is answered with a redirect.
///
/// # Arguments
/// - `state` - Application state containing the student database and storage backend
/// - `params` - Student email
///
/// # Returns
/// - `200 OK` - Photo bytes with a content type guessed from the file extension
/// - `307 Temporary Redirect` - Photo hosted at an external URL
/// - `400 Bad Request` - Missing email
/// - `404 Not Found` - Unknown student, no photo, or missing file
/// - `500 Internal Server Error` - Storage or database error
#[utoipa::path(
    get,
    path = "/getimg",
    tag = UPLOAD_TAG,
    params(
        ("email" = String, Query, description = "Student email")
    ),
    responses(
        (status = 200, description = "Photo bytes", content_type = "application/octet-stream"),
        (status = 307, description = "Photo hosted at an external URL"),
        (status = 400, description = "Missing email", body = ErrorDto),
        (status = 404, description = "Photo not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile_photo(
    State(state): State<AppState>,
    Query(params): Query<PhotoParams>,
) -> Result<Response, AppError> {
    let email = require(params.email, "Email is required")?;

    let service = UploadService::new(
        &state.dbs.student,
        &state.dbs.image,
        state.storage.as_ref(),
        state.record_scope,
    );

    let response = match service.profile_photo(&email).await? {
        ProfilePhoto::Stored {
            content_type,
            bytes,
        } => (StatusCode::OK, [(header::CONTENT_TYPE, content_type)], bytes).into_response(),
        ProfilePhoto::External(url) => Redirect::temporary(&url).into_response(),
    };

    Ok(response)
}

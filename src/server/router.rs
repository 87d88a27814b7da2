use std::path::Path;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{LoginDto, LoginResponseDto, SignupDto},
        diary::{DiaryContentDto, DiaryRequestDto},
        personal::{PersonalScheduleDto, PersonalScheduleRequestDto},
        profile::{ProfileDto, UpdateProfileDto},
        schedule::MealPlanDto,
        school::{SchoolDto, SchoolListRequestDto},
        upload::{ImagePathDto, UploadResponseDto},
    },
    server::{
        controller::{self, auth, diary, personal, profile, schedule, school, upload},
        state::AppState,
        storage::UploadFolder,
    },
};

/// Largest accepted request body, sized for photo uploads.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    info(title = "schoolmate", description = "School-life companion backend"),
    paths(
        controller::index,
        schedule::get_school_calendar,
        schedule::get_timetable,
        schedule::get_meals,
        personal::add_schedule,
        personal::delete_schedule,
        personal::get_schedules,
        diary::add_diary,
        diary::update_diary,
        diary::get_diary,
        upload::upload_class_image,
        upload::get_class_image,
        upload::upload_profile_photo,
        upload::get_profile_photo,
        auth::login,
        auth::signup,
        profile::get_profile,
        profile::update_profile,
        school::list_schools,
    ),
    components(schemas(
        ErrorDto,
        MessageDto,
        LoginDto,
        LoginResponseDto,
        SignupDto,
        DiaryRequestDto,
        DiaryContentDto,
        PersonalScheduleRequestDto,
        PersonalScheduleDto,
        ProfileDto,
        UpdateProfileDto,
        MealPlanDto,
        SchoolListRequestDto,
        SchoolDto,
        UploadResponseDto,
        ImagePathDto,
        upload::UploadForm,
    )),
    tags(
        (name = "schedule", description = "NEIS calendar, timetable and meals"),
        (name = "personal", description = "Personal schedule entries"),
        (name = "diary", description = "Class diary"),
        (name = "upload", description = "Class images and profile photos"),
        (name = "auth", description = "Login and registration"),
        (name = "profile", description = "Student profile"),
        (name = "school", description = "School directory"),
    )
)]
pub struct ApiDoc;

/// Builds the application router.
///
/// # Arguments
/// - `upload_root` - Root directory of the local storage backend; when set, its
///   upload folders are served as static files under the same names
pub fn router(upload_root: Option<&Path>) -> Router<AppState> {
    let mut router = Router::new()
        .route("/", get(controller::index))
        .route("/schooldata", get(schedule::get_school_calendar))
        .route("/timetabledata", get(schedule::get_timetable))
        .route("/mealdata", get(schedule::get_meals))
        .route("/personal-addschedule", post(personal::add_schedule))
        .route("/personal-delschedule", post(personal::delete_schedule))
        .route("/personaldata", get(personal::get_schedules))
        .route("/diary/add", post(diary::add_diary))
        .route("/diary/update", put(diary::update_diary))
        .route("/diary", get(diary::get_diary))
        .route("/upload", post(upload::upload_class_image))
        .route("/image", get(upload::get_class_image))
        .route("/uploadimg", post(upload::upload_profile_photo))
        .route("/getimg", get(upload::get_profile_photo))
        .route("/login", post(auth::login))
        .route("/signup", post(auth::signup))
        .route(
            "/profile",
            get(profile::get_profile).post(profile::update_profile),
        )
        .route("/getSchools", post(school::list_schools))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()));

    if let Some(root) = upload_root {
        for folder in UploadFolder::ALL {
            router = router.nest_service(
                &format!("/{}", folder.as_str()),
                ServeDir::new(root.join(folder.as_str())),
            );
        }
    }

    router
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
}

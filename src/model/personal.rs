use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of the personal schedule add and delete endpoints.
#[derive(Deserialize, ToSchema)]
pub struct PersonalScheduleRequestDto {
    pub email: Option<String>,
    pub calendar_name: Option<String>,
    /// Any common date form; stored as `YYYY-MM-DD`.
    pub calendar_date: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq)]
pub struct PersonalScheduleDto {
    pub calendar_name: String,
    /// Date rendered as `YYYYMMDD`.
    pub calendar_date: String,
}

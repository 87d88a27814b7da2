use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of the diary add and update endpoints.
#[derive(Deserialize, ToSchema)]
pub struct DiaryRequestDto {
    pub email: Option<String>,
    pub date: Option<String>,
    pub content: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct DiaryContentDto {
    pub content: String,
}

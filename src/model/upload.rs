use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UploadResponseDto {
    pub message: String,
    #[serde(rename = "filePath")]
    pub file_path: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ImagePathDto {
    #[serde(rename = "imagePath")]
    pub image_path: String,
}

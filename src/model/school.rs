use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct SchoolListRequestDto {
    /// Office code, e.g. `B10`.
    pub office: Option<String>,
    /// One-based page number.
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq)]
pub struct SchoolDto {
    #[serde(rename = "schoolName")]
    pub school_name: String,
    #[serde(rename = "administrativeCode")]
    pub administrative_code: String,
}

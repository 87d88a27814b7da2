use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Profile as returned to the client.
///
/// Field names follow the column names the client app was built against.
#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq)]
pub struct ProfileDto {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Office")]
    pub office: Option<String>,
    #[serde(rename = "schoolName")]
    pub school_name: Option<String>,
    pub grade: Option<i32>,
    #[serde(rename = "Class")]
    pub class: Option<i32>,
    pub num: Option<i32>,
    #[serde(rename = "schoolCode")]
    pub school_code: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateProfileDto {
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "Office")]
    pub office: Option<String>,
    #[serde(rename = "schoolName")]
    pub school_name: Option<String>,
    #[serde(rename = "schoolCode")]
    pub school_code: Option<String>,
    pub grade: Option<i32>,
    #[serde(rename = "Class")]
    pub class: Option<i32>,
    pub num: Option<i32>,
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct LoginDto {
    /// ID token issued by the identity provider to the client.
    #[serde(rename = "idToken")]
    pub id_token: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginResponseDto {
    pub message: String,
    pub email: String,
}

#[derive(Deserialize, ToSchema)]
pub struct SignupDto {
    pub email: Option<String>,
}

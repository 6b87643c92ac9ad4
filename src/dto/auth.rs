use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Login request body with the admin account credentials.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Successful login response carrying the issued bearer token.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenDto {
    pub access_token: String,
}

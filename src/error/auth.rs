use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::dto::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Login credentials did not match the configured admin account.
    ///
    /// Results in a 401 Unauthorized response with a generic message so the
    /// response does not reveal which part of the credentials was wrong.
    #[error("Login attempted with invalid credentials")]
    InvalidCredentials,

    /// No bearer token was supplied on a guarded endpoint.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request to a guarded endpoint without a bearer token")]
    MissingToken,

    /// The supplied bearer token is unknown or has expired.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request with an invalid or expired bearer token")]
    InvalidToken,

    /// An authenticated caller lacks the required permission.
    ///
    /// Results in a 403 Forbidden response. The message is logged server-side
    /// for diagnostics, not returned to the client.
    ///
    /// # Fields
    /// - Email of the authenticated account
    /// - Description of the denied action
    #[error("Access denied for {0}: {1}")]
    AccessDenied(String, String),
}

/// Converts authentication errors into HTTP responses.
///
/// All variants keep the client-facing message generic to avoid information
/// leakage; details stay in the server log.
///
/// # Returns
/// - 401 Unauthorized - Invalid credentials, missing token, or invalid token
/// - 403 Forbidden - Authenticated but lacking the required permission
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid credentials".to_string(),
                }),
            )
                .into_response(),
            Self::MissingToken | Self::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "A valid access token is required".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(email, message) => {
                tracing::debug!("Access denied for {}: {}", email, message);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "You don't have permission to perform this action".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

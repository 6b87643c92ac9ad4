use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::dto::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AdminError {
    /// Duplicate cleanup was attempted while running in production mode.
    ///
    /// The run-mode gate is a hard precondition checked before any store
    /// access; the request is rejected with 403 Forbidden and no work is
    /// performed. Not retried.
    #[error("Duplicate cleanup is not allowed in production")]
    CleanupForbidden,
}

/// Converts administrative errors into HTTP responses.
///
/// # Returns
/// - 403 Forbidden - Cleanup attempted in production mode
impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        match self {
            Self::CleanupForbidden => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Duplicate cleanup is not allowed in production".to_string(),
                }),
            )
                .into_response(),
        }
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::dto::api::ErrorDto;

/// Catalog domain errors, decided at the point of failure.
///
/// Each variant carries an explicit kind rather than being inferred from a
/// generic error's shape downstream: an unparseable identifier, a missing
/// record, and a normalized-name collision are distinct failures with
/// distinct status codes.
#[derive(Error, Debug)]
pub enum GameError {
    /// The supplied identifier is not a valid game id.
    ///
    /// Results in a 400 Bad Request response.
    #[error("The provided ID '{0}' is not valid")]
    InvalidId(String),

    /// No game exists with the given id.
    ///
    /// Results in a 404 Not Found response.
    #[error("No game found with ID: {0}")]
    NotFoundById(i32),

    /// No game name matched the given search term.
    ///
    /// Results in a 404 Not Found response.
    #[error("No games found that match: {0}")]
    NotFoundByName(String),

    /// No game exists with the given slug.
    ///
    /// Results in a 404 Not Found response.
    #[error("No game found with slug: {0}")]
    NotFoundBySlug(String),

    /// A new record's normalized name collides with an existing record.
    ///
    /// Rejected before anything is written. Results in a 400 Bad Request
    /// response naming the existing record.
    #[error("This game '{0}' already exists")]
    DuplicateName(String),
}

/// Converts catalog errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Invalid id or duplicate normalized name
/// - 404 Not Found - Lookup by id, name, or slug found nothing
impl IntoResponse for GameError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::InvalidId(_) | Self::DuplicateName(_) => StatusCode::BAD_REQUEST,
            Self::NotFoundById(_) | Self::NotFoundByName(_) | Self::NotFoundBySlug(_) => {
                StatusCode::NOT_FOUND
            }
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

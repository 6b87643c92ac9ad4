use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    dto::{api::ErrorDto, game::GameDto},
    error::AppError,
    service::seed::SeedService,
    state::AppState,
};

/// Tag for grouping seed endpoints in OpenAPI documentation
pub static SEED_TAG: &str = "seed";

/// Seed the catalog from the external game-data API.
///
/// Fetches the external listing and bulk-inserts every result. Prices are
/// randomized since the upstream carries none. Running the seed repeatedly
/// inserts duplicates; the admin cleanup removes them.
///
/// # Arguments
/// - `state` - Application state containing the database connection and HTTP client
///
/// # Returns
/// - `201 Created` - The inserted games
/// - `500 Internal Server Error` - Upstream request or database error
#[utoipa::path(
    post,
    path = "/api/seed",
    tag = SEED_TAG,
    responses(
        (status = 201, description = "Successfully seeded games", body = Vec<GameDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn seed_games(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = SeedService::new(&state.db, &state.http_client, &state.seed_url);

    let games = service.execute_seed().await?;

    Ok((
        StatusCode::CREATED,
        Json(games.into_iter().map(|g| g.into_dto()).collect::<Vec<_>>()),
    ))
}

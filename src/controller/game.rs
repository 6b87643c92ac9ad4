use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{
        api::ErrorDto,
        game::{CreateGameDto, GameDto, UpdateGameDto},
    },
    error::AppError,
    model::game::{CreateGameParam, UpdateGameParam},
    service::game::GameService,
    state::AppState,
};

/// Tag for grouping game endpoints in OpenAPI documentation
pub static GAME_TAG: &str = "game";

/// Create a new game.
///
/// Creates a single game record. The name is stored lowercased and a URL slug
/// is derived from it. A record whose normalized name collides with an
/// existing record is rejected.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Game creation data (name, category, price, optional fields)
///
/// # Returns
/// - `201 Created` - Successfully created game
/// - `400 Bad Request` - Invalid data or duplicate name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/games",
    tag = GAME_TAG,
    request_body = CreateGameDto,
    responses(
        (status = 201, description = "Successfully created game", body = GameDto),
        (status = 400, description = "Invalid game data or duplicate name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_game(
    State(state): State<AppState>,
    Json(payload): Json<CreateGameDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = GameService::new(&state.db);

    let param = CreateGameParam::from_dto(payload);

    let game = service.create(param).await?;

    Ok((StatusCode::CREATED, Json(game.into_dto())))
}

/// Create multiple games in one request.
///
/// Bulk variant of game creation. Every record is validated and slugged like
/// a single create, but no duplicate check is performed; the admin cleanup
/// endpoint exists to remove duplicates introduced here.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - List of game creation records
///
/// # Returns
/// - `201 Created` - All records created, in submission order
/// - `400 Bad Request` - At least one record failed validation
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/games/bulk",
    tag = GAME_TAG,
    request_body = Vec<CreateGameDto>,
    responses(
        (status = 201, description = "Successfully created games", body = Vec<GameDto>),
        (status = 400, description = "Invalid game data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_games_bulk(
    State(state): State<AppState>,
    Json(payload): Json<Vec<CreateGameDto>>,
) -> Result<impl IntoResponse, AppError> {
    let service = GameService::new(&state.db);

    let params = payload.into_iter().map(CreateGameParam::from_dto).collect();

    let games = service.create_many(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(games.into_iter().map(|g| g.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get every game in the catalog.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - All games in id order
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/games",
    tag = GAME_TAG,
    responses(
        (status = 200, description = "Successfully retrieved games", body = Vec<GameDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_games(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = GameService::new(&state.db);

    let games = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(games.into_iter().map(|g| g.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get a game by id.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Game id path parameter
///
/// # Returns
/// - `200 OK` - The requested game
/// - `400 Bad Request` - The id is not a valid integer
/// - `404 Not Found` - No game with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/games/{id}",
    tag = GAME_TAG,
    params(
        ("id" = String, Path, description = "Game ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved game", body = GameDto),
        (status = 400, description = "Invalid game ID", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_game_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = GameService::new(&state.db);

    let game = service.get_by_id(&id).await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

/// Search games by name fragment.
///
/// Case-insensitive substring search over stored names. An empty result set
/// is reported as not found.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `name` - Name fragment to search for
///
/// # Returns
/// - `200 OK` - Matching games
/// - `404 Not Found` - No game name contains the fragment
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/games/search/name/{name}",
    tag = GAME_TAG,
    params(
        ("name" = String, Path, description = "Name fragment to search for")
    ),
    responses(
        (status = 200, description = "Successfully retrieved games", body = Vec<GameDto>),
        (status = 404, description = "No games matched", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_games_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = GameService::new(&state.db);

    let games = service.search_by_name(&name).await?;

    Ok((
        StatusCode::OK,
        Json(games.into_iter().map(|g| g.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get a game by slug.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `slug` - Slug to look up
///
/// # Returns
/// - `200 OK` - The requested game
/// - `404 Not Found` - No game with that slug
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/games/search/slug/{slug}",
    tag = GAME_TAG,
    params(
        ("slug" = String, Path, description = "Game slug")
    ),
    responses(
        (status = 200, description = "Successfully retrieved game", body = GameDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_game_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = GameService::new(&state.db);

    let game = service.get_by_slug(&slug).await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

/// Update a game by id.
///
/// Applies the provided fields to the record; omitted fields are left
/// unchanged. An updated name is lowercased, but the slug is not regenerated.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Game id path parameter
/// - `payload` - Fields to update
///
/// # Returns
/// - `200 OK` - The updated game
/// - `400 Bad Request` - Invalid id or invalid data
/// - `404 Not Found` - No game with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/games/{id}",
    tag = GAME_TAG,
    params(
        ("id" = String, Path, description = "Game ID")
    ),
    request_body = UpdateGameDto,
    responses(
        (status = 200, description = "Successfully updated game", body = GameDto),
        (status = 400, description = "Invalid game ID or data", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_game_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateGameDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = GameService::new(&state.db);

    let param = UpdateGameParam::from_dto(payload);

    let game = service.update_by_id(&id, param).await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

/// Update the first game matching a name search.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `name` - Name fragment identifying the game
/// - `payload` - Fields to update
///
/// # Returns
/// - `200 OK` - The updated game
/// - `400 Bad Request` - Invalid data
/// - `404 Not Found` - No game name contains the fragment
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/games/name/{name}",
    tag = GAME_TAG,
    params(
        ("name" = String, Path, description = "Name fragment identifying the game")
    ),
    request_body = UpdateGameDto,
    responses(
        (status = 200, description = "Successfully updated game", body = GameDto),
        (status = 400, description = "Invalid game data", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_game_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(payload): Json<UpdateGameDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = GameService::new(&state.db);

    let param = UpdateGameParam::from_dto(payload);

    let game = service.update_by_name(&name, param).await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

/// Update a game by slug.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `slug` - Slug identifying the game
/// - `payload` - Fields to update
///
/// # Returns
/// - `200 OK` - The updated game
/// - `400 Bad Request` - Invalid data
/// - `404 Not Found` - No game with that slug
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/games/slug/{slug}",
    tag = GAME_TAG,
    params(
        ("slug" = String, Path, description = "Game slug")
    ),
    request_body = UpdateGameDto,
    responses(
        (status = 200, description = "Successfully updated game", body = GameDto),
        (status = 400, description = "Invalid game data", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_game_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(payload): Json<UpdateGameDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = GameService::new(&state.db);

    let param = UpdateGameParam::from_dto(payload);

    let game = service.update_by_slug(&slug, param).await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

/// Delete a game by id.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Game id path parameter
///
/// # Returns
/// - `200 OK` - The removed game
/// - `400 Bad Request` - The id is not a valid integer
/// - `404 Not Found` - No game with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/games/{id}",
    tag = GAME_TAG,
    params(
        ("id" = String, Path, description = "Game ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted game", body = GameDto),
        (status = 400, description = "Invalid game ID", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_game_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = GameService::new(&state.db);

    let game = service.remove_by_id(&id).await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

/// Delete the first game matching a name search.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `name` - Name fragment identifying the game
///
/// # Returns
/// - `200 OK` - The removed game
/// - `404 Not Found` - No game name contains the fragment
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/games/name/{name}",
    tag = GAME_TAG,
    params(
        ("name" = String, Path, description = "Name fragment identifying the game")
    ),
    responses(
        (status = 200, description = "Successfully deleted game", body = GameDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_game_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = GameService::new(&state.db);

    let game = service.remove_by_name(&name).await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

/// Delete a game by slug.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `slug` - Slug identifying the game
///
/// # Returns
/// - `200 OK` - The removed game
/// - `404 Not Found` - No game with that slug
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/games/slug/{slug}",
    tag = GAME_TAG,
    params(
        ("slug" = String, Path, description = "Game slug")
    ),
    responses(
        (status = 200, description = "Successfully deleted game", body = GameDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_game_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = GameService::new(&state.db);

    let game = service.remove_by_slug(&slug).await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

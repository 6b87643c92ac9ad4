//! Axum route configuration and OpenAPI documentation.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{admin, auth, game, seed},
    dto,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::login,
        game::create_game,
        game::create_games_bulk,
        game::get_games,
        game::get_game_by_id,
        game::search_games_by_name,
        game::get_game_by_slug,
        game::update_game_by_id,
        game::update_game_by_name,
        game::update_game_by_slug,
        game::delete_game_by_id,
        game::delete_game_by_name,
        game::delete_game_by_slug,
        admin::clean_duplicates,
        seed::seed_games,
    ),
    components(schemas(
        dto::api::ErrorDto,
        dto::auth::LoginDto,
        dto::auth::TokenDto,
        dto::game::GameDto,
        dto::game::CreateGameDto,
        dto::game::UpdateGameDto,
        dto::admin::DuplicateGroupDto,
        dto::admin::CleanupReportDto,
    )),
    tags(
        (name = auth::AUTH_TAG, description = "Admin login"),
        (name = game::GAME_TAG, description = "Game catalog CRUD and search"),
        (name = admin::ADMIN_TAG, description = "Administrative maintenance"),
        (name = seed::SEED_TAG, description = "Catalog seeding"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

/// Registers the bearer token scheme referenced by the guarded endpoints.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_token",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            );
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/games", post(game::create_game).get(game::get_games))
        .route("/api/games/bulk", post(game::create_games_bulk))
        .route("/api/games/search/name/{name}", get(game::search_games_by_name))
        .route("/api/games/search/slug/{slug}", get(game::get_game_by_slug))
        .route(
            "/api/games/{id}",
            get(game::get_game_by_id)
                .patch(game::update_game_by_id)
                .delete(game::delete_game_by_id),
        )
        .route(
            "/api/games/name/{name}",
            axum::routing::patch(game::update_game_by_name).delete(game::delete_game_by_name),
        )
        .route(
            "/api/games/slug/{slug}",
            axum::routing::patch(game::update_game_by_slug).delete(game::delete_game_by_slug),
        )
        .route("/api/admin/clean-duplicates", post(admin::clean_duplicates))
        .route("/api/seed", post(seed::seed_games))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. All fields are cheap to
//! clone: the database connection is a pool handle, `reqwest::Client` wraps an
//! `Arc`, and the token service shares its map behind an `Arc`.

use sea_orm::DatabaseConnection;

use crate::{config::RunMode, service::auth::AccessTokenService};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for external API requests.
    ///
    /// Configured with redirects disabled; used for the seed endpoint's
    /// calls to the external game-data API.
    pub http_client: reqwest::Client,

    /// Service issuing and validating admin access tokens.
    pub token_service: AccessTokenService,

    /// Deployment mode, consulted by the duplicate-cleanup gate.
    pub run_mode: RunMode,

    /// Configured admin login email.
    pub admin_email: String,

    /// Configured admin login password.
    pub admin_password: String,

    /// Full listing URL for the external game-data API.
    pub seed_url: String,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        token_service: AccessTokenService,
        run_mode: RunMode,
        admin_email: String,
        admin_password: String,
        seed_url: String,
    ) -> Self {
        Self {
            db,
            http_client,
            token_service,
            run_mode,
            admin_email,
            admin_password,
            seed_url,
        }
    }
}

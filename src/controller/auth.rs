use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    dto::{
        api::ErrorDto,
        auth::{LoginDto, TokenDto},
    },
    error::AppError,
    service::auth::AuthService,
    state::AppState,
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in with admin credentials.
///
/// Exchanges the configured admin email and password for a bearer access
/// token. The token gates the administrative endpoints and expires after a
/// fixed interval.
///
/// # Arguments
/// - `state` - Application state containing the token service and credentials
/// - `payload` - Submitted email and password
///
/// # Returns
/// - `200 OK` - Access token for subsequent requests
/// - `401 Unauthorized` - Credentials did not match
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Successfully logged in", body = TokenDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(
        &state.admin_email,
        &state.admin_password,
        &state.token_service,
    );

    let access_token = auth_service.login(&payload.email, &payload.password).await?;

    Ok((StatusCode::OK, Json(TokenDto { access_token })))
}

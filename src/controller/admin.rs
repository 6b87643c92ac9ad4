use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    dto::{admin::CleanupReportDto, api::ErrorDto},
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    service::admin::CleanupService,
    state::AppState,
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// Remove duplicate games from the catalog.
///
/// Groups the catalog by normalized name, keeps the first record of each
/// group, backs the rest up, and deletes them. Refused outright in
/// production mode.
///
/// # Access Control
/// - `Admin` - Only admins can run the duplicate cleanup
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
///
/// # Returns
/// - `200 OK` - Cleanup report (nothing removed, or removal summary with backup id)
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Token lacks admin permissions, or production mode
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/admin/clean-duplicates",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Cleanup completed", body = CleanupReportDto),
        (status = 401, description = "Missing or invalid access token", body = ErrorDto),
        (status = 403, description = "Not permitted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(
        ("bearer_token" = [])
    ),
)]
pub async fn clean_duplicates(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.token_service, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = CleanupService::new(&state.db, state.run_mode);

    let report = service.cleanup_duplicates().await?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}

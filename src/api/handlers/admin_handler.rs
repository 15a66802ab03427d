//! Administrative handlers.

use axum::{
    extract::{Path, State},
    middleware,
    routing::delete,
    Router,
};

use crate::api::middleware::log_execution_time;
use crate::api::AppState;
use crate::errors::AppResult;

/// Plain-text body returned once the user cache is emptied
pub const CACHE_CLEARED_MESSAGE: &str = "User cache cleared successfully";

/// Create admin routes
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/clearAllCache", delete(clear_all_cache))
        .route("/deleteUser/:user_id", delete(delete_user))
        .route_layer(middleware::from_fn(log_execution_time))
}

/// Clear every cached user
#[utoipa::path(
    delete,
    path = "/admin/clearAllCache",
    tag = "Admin",
    responses(
        (status = 200, description = "Cache successfully cleared", body = String, content_type = "text/plain"),
        (status = 500, description = "Error while clearing cache")
    )
)]
pub async fn clear_all_cache(State(state): State<AppState>) -> AppResult<&'static str> {
    state.admin_service.clear_all_cache().await?;
    Ok(CACHE_CLEARED_MESSAGE)
}

/// Delete a user and evict its cache entry
#[utoipa::path(
    delete,
    path = "/admin/deleteUser/{user_id}",
    tag = "Admin",
    params(
        ("user_id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User successfully deleted"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<()> {
    state.admin_service.delete_user(&user_id).await
}

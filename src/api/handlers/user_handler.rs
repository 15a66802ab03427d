//! User handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{User, UserRequest};
use crate::errors::AppResult;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/addUser", post(add_user))
        .route("/getUser/:user_id", get(get_user))
        .route("/updateUser/:user_id", post(update_user))
}

/// Create a new user with a generated userId
#[utoipa::path(
    post,
    path = "/users/addUser",
    tag = "Users",
    request_body = UserRequest,
    responses(
        (status = 200, description = "User successfully created", body = User),
        (status = 400, description = "Invalid input data"),
        (status = 409, description = "Email already exists")
    )
)]
pub async fn add_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserRequest>,
) -> AppResult<Json<User>> {
    let user = state.user_service.create_user(payload).await?;
    Ok(Json(user))
}

/// Get a user by ID, served from the cache when possible
#[utoipa::path(
    get,
    path = "/users/getUser/{user_id}",
    tag = "Users",
    params(
        ("user_id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<User>> {
    let user = state.user_service.get_user(&user_id).await?;
    Ok(Json(user))
}

/// Update an existing user's details
#[utoipa::path(
    post,
    path = "/users/updateUser/{user_id}",
    tag = "Users",
    params(
        ("user_id" = String, Path, description = "User ID")
    ),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User successfully updated", body = User),
        (status = 400, description = "Invalid input data"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Email already exists")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UserRequest>,
) -> AppResult<Json<User>> {
    tracing::debug!(user_id = %user_id, "Received user update");
    let user = state.user_service.update_user(&user_id, payload).await?;
    Ok(Json(user))
}

//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{admin_handler, user_handler};
use crate::domain::{User, UserRequest};

/// OpenAPI documentation for the User Cache Service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Cache Service API",
        version = "1.0",
        description = "User records with read-through caching of lookups",
        contact(name = "User Cache Service maintainers", email = "maintainers@user-cache.local"),
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Application server")
    ),
    paths(
        user_handler::add_user,
        user_handler::get_user,
        user_handler::update_user,
        admin_handler::clear_all_cache,
        admin_handler::delete_user,
    ),
    components(
        schemas(User, UserRequest)
    ),
    tags(
        (name = "Users", description = "User management operations"),
        (name = "Admin", description = "Cache administration")
    )
)]
pub struct ApiDoc;

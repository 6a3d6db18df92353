use crate::api::auth::auth::sign_in;
use crate::api::users::users::{create_user, get_user, list_users, update_user};
use crate::health;
use crate::state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/healthz", get(health::healthz))
        // Auth
        .route("/api/v1/auth/sign-in", post(sign_in))
        // Users
        .route("/api/v1/users", post(create_user).get(list_users))
        .route("/api/v1/users/{username}", get(get_user).patch(update_user))
        // Add shared state
        .with_state(state)
        // CORS middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

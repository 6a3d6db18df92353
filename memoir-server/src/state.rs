use memoir_api::UserService;
use memoir_config::Config;

use sqlx::SqlitePool;

/// Shared state for the HTTP surface. Handlers construct a [`UserService`]
/// per request, the same way a maintenance command constructs one per
/// invocation.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Config,
}

impl AppState {
    pub fn user_service(&self) -> UserService {
        UserService::new(self.config.clone(), self.pool.clone())
    }
}

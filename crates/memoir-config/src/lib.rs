mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, Result};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5230;
const DEFAULT_DATABASE_FILENAME: &str = "memoir.db";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const MIN_PORT: u16 = 1024;
const MIN_SECRET_LEN: usize = 16;

/// How far below the configured server port a maintenance invocation sits.
/// A maintenance command instantiates the service layer against the same
/// database file while the real server may be running; the ports must never
/// coincide even though the maintenance context never actually listens.
pub const MAINTENANCE_PORT_OFFSET: u16 = 5;

#[cfg(test)]
mod tests;

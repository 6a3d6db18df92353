use crate::{
    AuthConfig, ConfigError, DatabaseConfig, LoggingConfig, MAINTENANCE_PORT_OFFSET,
    Result as ConfigResult, ServerConfig,
};

use std::path::PathBuf;

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for MEMOIR_CONFIG_DIR env var, else use ./.memoir/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply MEMOIR_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigResult<Self> {
        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: MEMOIR_CONFIG_DIR env var > ./.memoir/ (relative to cwd)
    pub fn config_dir() -> ConfigResult<PathBuf> {
        if let Ok(dir) = std::env::var("MEMOIR_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".memoir"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigResult<()> {
        self.server.validate()?;
        self.auth.validate()?;

        // Validate database path doesn't escape config dir
        let db_path = std::path::Path::new(&self.database.path);
        if db_path.is_absolute() || self.database.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Derive the config a maintenance command runs under. Identical to the
    /// server config except the port sits MAINTENANCE_PORT_OFFSET below the
    /// configured one, so a maintenance invocation can never collide with a
    /// live server on the same config. The receiver is left untouched.
    pub fn for_maintenance(&self) -> Self {
        let mut derived = self.clone();
        derived.server.port = self.server.port.saturating_sub(MAINTENANCE_PORT_OFFSET);
        derived
    }

    /// Warn when a config file from releases that read ~/.memoir/config.toml
    /// is still around but no longer consulted. Call after logger init.
    pub fn warn_legacy() {
        let Some(home) = dirs::home_dir() else {
            return;
        };

        let legacy_path = home.join(".memoir").join("config.toml");
        let active_path = match Self::config_dir() {
            Ok(dir) => dir.join("config.toml"),
            Err(_) => return,
        };

        if legacy_path.exists() && legacy_path != active_path {
            warn!(
                "Ignoring legacy config at {}; move it to {}",
                legacy_path.display(),
                active_path.display()
            );
        }
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  database: {}", self.database.path);

        info!(
            "  auth.secret: {}",
            if self.auth.secret.is_some() {
                "set"
            } else {
                "not set"
            }
        );

        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );

        if let Some(ref file) = self.logging.file {
            info!("  log file: {}/{}", self.logging.dir, file);
        }
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("MEMOIR_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("MEMOIR_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("MEMOIR_DATABASE_PATH", &mut self.database.path);

        // Auth
        Self::apply_env_option_string("MEMOIR_AUTH_SECRET", &mut self.auth.secret);

        // Logging
        Self::apply_env_parse("MEMOIR_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("MEMOIR_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("MEMOIR_LOG_FILE", &mut self.logging.file);
        Self::apply_env_string("MEMOIR_LOG_DIR", &mut self.logging.dir);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}

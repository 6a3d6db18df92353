use crate::{ConfigError, MIN_SECRET_LEN, Result as ConfigResult};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 secret for access tokens. Required by `serve`; maintenance
    /// commands run without it.
    pub secret: Option<String>,
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(ref secret) = self.secret
            && secret.len() < MIN_SECRET_LEN
        {
            return Err(ConfigError::auth(format!(
                "auth.secret must be at least {} characters",
                MIN_SECRET_LEN
            )));
        }

        Ok(())
    }
}

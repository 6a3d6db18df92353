use crate::{ACCESS_TOKEN_TTL_SECS, AuthError, Claims, Result as AuthResult};

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

/// Issues HS256 access tokens from the instance secret.
pub struct TokenSigner {
    encoding_key: EncodingKey,
}

impl TokenSigner {
    pub fn with_hs256(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
        }
    }

    /// Sign a token for `username` with the standard TTL.
    #[track_caller]
    pub fn issue(&self, username: &str, role: &str) -> AuthResult<String> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: username.to_string(),
            role: role.to_string(),
            exp: now + ACCESS_TOKEN_TTL_SECS,
            iat: now,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::JwtEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }
}

/// Verifies HS256 access tokens against the instance secret.
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtValidator {
    pub fn with_hs256(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 30; // 30 second clock skew tolerance

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Validate a token and return its claims.
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::JwtDecode {
                        source: e,
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        token_data.claims.validate()?;

        Ok(token_data.claims)
    }
}

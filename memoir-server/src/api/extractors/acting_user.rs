//! Axum extractors for REST API authentication

use crate::ApiError;
use crate::state::AppState;

use memoir_auth::JwtValidator;

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::request::Parts};
use error_location::ErrorLocation;

/// Extracts the acting username from the `Authorization: Bearer` header.
///
/// The resolved name is passed explicitly into the service layer; nothing
/// downstream reads request state for identity.
pub struct ActingUser(pub String);

impl FromRequestParts<AppState> for ActingUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Some(ref secret) = state.config.auth.secret else {
                return Err(ApiError::Unauthorized {
                    message: "auth.secret is not configured".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            };

            let header = parts
                .headers
                .get(axum::http::header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .ok_or_else(|| ApiError::Unauthorized {
                    message: "missing authorization header".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })?;

            let token = header
                .strip_prefix("Bearer ")
                .ok_or_else(|| ApiError::Unauthorized {
                    message: "expected 'Bearer' authorization scheme".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })?;

            let claims = JwtValidator::with_hs256(secret.as_bytes()).validate(token)?;

            Ok(ActingUser(claims.sub))
        }
    }
}

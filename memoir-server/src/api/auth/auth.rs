//! Auth REST API handlers

use crate::ApiResult;
use crate::api::auth::sign_in_request::SignInRequest;
use crate::api::auth::sign_in_response::SignInResponse;
use crate::state::AppState;

use axum::{Json, extract::State};

/// POST /api/v1/auth/sign-in
///
/// Verify credentials and return the user with a bearer token.
pub async fn sign_in(
    State(state): State<AppState>,
    Json(request): Json<SignInRequest>,
) -> ApiResult<Json<SignInResponse>> {
    let service = state.user_service();

    let (user, access_token) = service.sign_in(&request.username, &request.password).await?;

    Ok(Json(SignInResponse {
        user: user.into(),
        access_token,
    }))
}

//! User REST API handlers

use crate::ApiResult;
use crate::api::extractors::acting_user::ActingUser;
use crate::api::users::create_user_request::CreateUserRequest;
use crate::api::users::update_user_request::UpdateUserRequest;
use crate::api::users::user_dto::UserDto;
use crate::api::users::user_list_response::UserListResponse;
use crate::api::users::user_response::UserResponse;
use crate::state::AppState;

use axum::{
    Json,
    extract::{Path, State},
};

/// POST /api/v1/users
///
/// Sign up. The first account on the instance becomes the admin.
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = state.user_service();

    let user = service
        .create_user(&memoir_api::CreateUserRequest {
            username: request.username,
            password: request.password,
            email: request.email,
            nickname: request.nickname,
        })
        .await?;

    Ok(Json(UserResponse { user: user.into() }))
}

/// GET /api/v1/users
///
/// List all users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<UserListResponse>> {
    let users = state.user_service().list_users().await?;

    Ok(Json(UserListResponse {
        users: users.into_iter().map(UserDto::from).collect(),
    }))
}

/// GET /api/v1/users/{username}
///
/// Get a single user by username
pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user = state.user_service().get_user(&username).await?;

    Ok(Json(UserResponse { user: user.into() }))
}

/// PATCH /api/v1/users/{username}
///
/// Field-masked partial update. The acting user comes from the bearer
/// token and is passed explicitly to the service layer.
pub async fn update_user(
    State(state): State<AppState>,
    ActingUser(acting_username): ActingUser,
    Path(username): Path<String>,
    Json(request): Json<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = state.user_service();

    let user = service
        .update_user(
            &acting_username,
            &memoir_api::UpdateUserRequest {
                username,
                password: request.password,
                email: request.email,
                nickname: request.nickname,
                update_mask: request.update_mask,
            },
        )
        .await?;

    Ok(Json(UserResponse { user: user.into() }))
}

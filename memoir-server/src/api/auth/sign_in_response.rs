use crate::api::users::user_dto::UserDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SignInResponse {
    pub user: UserDto,
    pub access_token: String,
}

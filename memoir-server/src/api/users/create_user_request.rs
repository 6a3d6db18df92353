use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub nickname: String,
}

use memoir_api::FieldMask;

use serde::Deserialize;

/// PATCH body. The target username comes from the path; only the
/// attributes named in `update_mask` are applied.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub password: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub nickname: Option<String>,

    pub update_mask: FieldMask,
}

pub mod error;
pub mod field_mask;
pub mod legacy;
pub mod requests;
pub mod user_service;

pub use error::{Result, ServiceError};
pub use field_mask::FieldMask;
pub use legacy::LegacyUpdateUserRequest;
pub use requests::{CreateUserRequest, UpdateUserRequest};
pub use user_service::UserService;

pub mod reset_password;
pub mod serve;
pub mod version;

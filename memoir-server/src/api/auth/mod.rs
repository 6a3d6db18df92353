pub mod auth;
pub mod sign_in_request;
pub mod sign_in_response;

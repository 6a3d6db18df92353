mod claims;
mod error;
mod token;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use token::{JwtValidator, TokenSigner};

/// Access token lifetime in seconds (7 days). Sign-in is the only way to
/// obtain a token, so a short TTL would lock self-hosters out of their own
/// instance more often than it would protect anything.
pub const ACCESS_TOKEN_TTL_SECS: i64 = 7 * 24 * 60 * 60;

pub mod extractors;
pub mod middleware;
pub mod ownership;
pub mod password;
pub mod token;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::UserSummary;

pub use extractors::AuthenticatedUser;
pub use middleware::AuthMiddleware;
pub use ownership::ensure_owner;
pub use password::PasswordHasher;
pub use token::{Claims, TokenService};

/// Error message for any failed login, whether the email is unknown or the
/// password is wrong.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Represents the payload for a user login request.
///
/// Not format-validated: every failed login must produce the same
/// [`INVALID_CREDENTIALS`] response.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Represents the payload for a new user registration request.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name, 1 to 100 characters.
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Email address; also the login key.
    #[validate(email)]
    pub email: String,
    /// Must be at least 6 characters long.
    #[validate(length(min = 6))]
    pub password: String,
}

/// Response after successful registration or login.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: UserSummary,
    /// The signed bearer token.
    pub token: String,
}

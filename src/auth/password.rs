use crate::error::AppError;
use bcrypt::{hash, verify};

/// Salted bcrypt hashing with a configured work factor.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        hash(password, self.cost)
            .map_err(|e| AppError::InternalServerError(format!("Failed to hash password: {}", e)))
    }

    pub fn verify_password(&self, password: &str, hashed_password: &str) -> Result<bool, AppError> {
        verify(password, hashed_password)
            .map_err(|e| AppError::InternalServerError(format!("Failed to verify password: {}", e)))
    }

    /// Spends the same bcrypt work as a real verification and always fails.
    /// Used when there is no stored hash to check against.
    pub fn verify_nothing(&self, password: &str) -> bool {
        if let Err(e) = hash(password, self.cost) {
            log::warn!("Dummy password hash failed: {}", e);
        }
        false
    }
}

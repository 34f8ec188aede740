use crate::{error::AppError, models::User};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// How long an issued token stays valid.
pub const TOKEN_VALIDITY_HOURS: i64 = 24;

/// Represents the claims encoded within a JWT.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Subject of the token: the user's id.
    pub sub: String,
    /// Email of the user at issuance.
    pub email: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: usize,
    /// Expiration timestamp (seconds since epoch).
    pub exp: usize,
}

/// Issues and validates HS256 bearer tokens with a key from configuration.
///
/// There is no revocation list: a token is valid until `exp`, whatever
/// happens to the account in the meantime.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Generates a token for `user`, valid for 24 hours from now.
    pub fn issue_token(&self, user: &User) -> Result<String, AppError> {
        self.issue_token_at(user, Utc::now())
    }

    /// Generates a token as if it had been issued at `issued_at`.
    pub fn issue_token_at(&self, user: &User, issued_at: DateTime<Utc>) -> Result<String, AppError> {
        let expiration = issued_at
            .checked_add_signed(Duration::hours(TOKEN_VALIDITY_HOURS))
            .ok_or_else(|| AppError::InternalServerError("Token expiry out of range".into()))?;

        let claims = Claims {
            sub: user.id.clone(),
            email: user.email.clone(),
            iat: issued_at.timestamp() as usize,
            exp: expiration.timestamp() as usize,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalServerError(format!("Failed to generate token: {}", e)))
    }

    /// Verifies signature and expiry and returns the embedded claims.
    ///
    /// Every failure (bad signature, expired, malformed) is reported as the
    /// same `AppError::Unauthorized`.
    pub fn validate_token(&self, token: &str) -> Result<Claims, AppError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(data.claims)
    }
}

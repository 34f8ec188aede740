//!
//! # Custom Error Handling
//!
//! This module defines the custom error type `AppError` used throughout the service.
//! Every failure a handler can hit, from a missing bearer token to a database fault,
//! ends up as one of its variants.
//!
//! `AppError` implements `actix_web::error::ResponseError`, so handlers and middleware
//! can return it directly and actix-web renders a JSON body of the form
//! `{"error": "<message>"}`. Server-side failures are logged with their detail and
//! answered with a generic message, so SQL or hashing errors never reach the client.
//!
//! `From` implementations for `sqlx::Error`, `validator::ValidationErrors`,
//! `jsonwebtoken::errors::Error` and `bcrypt::BcryptError` allow the `?` operator.

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

/// Message sent to clients for every 5xx response.
const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Represents all possible errors that can occur within the application.
#[derive(Debug)]
pub enum AppError {
    /// The caller has no valid identity (HTTP 401).
    /// The message is sent to the client, so it must stay short and generic.
    Unauthorized(String),
    /// The caller is authenticated but does not own the resource (HTTP 403).
    Forbidden,
    /// A client-side error such as a duplicate account, bad credentials or a
    /// malformed body (HTTP 400).
    BadRequest(String),
    /// The requested resource does not exist (HTTP 404).
    NotFound(String),
    /// An unexpected server-side error (HTTP 500).
    InternalServerError(String),
    /// An error from the database layer (HTTP 500).
    DatabaseError(String),
    /// Input failed `validator` rules (HTTP 400).
    ValidationError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::Forbidden => write!(f, "Forbidden"),
            AppError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
            AppError::DatabaseError(msg) => write!(f, "Database Error: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::BadRequest(_) | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalServerError(_) | AppError::DatabaseError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::Unauthorized(msg) | AppError::BadRequest(msg) | AppError::NotFound(msg) => {
                msg.clone()
            }
            AppError::Forbidden => "Forbidden".to_string(),
            AppError::ValidationError(msg) => format!("Validation error: {}", msg),
            AppError::InternalServerError(detail) | AppError::DatabaseError(detail) => {
                log::error!("{}: {}", self.status_code(), detail);
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        };

        HttpResponse::build(self.status_code()).json(json!({ "error": message }))
    }
}

/// Converts `sqlx::Error` into `AppError`.
///
/// `RowNotFound` becomes `NotFound`; everything else is a `DatabaseError`.
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> AppError {
        match error {
            sqlx::Error::RowNotFound => AppError::NotFound("Record not found".into()),
            _ => AppError::DatabaseError(error.to_string()),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(error: ValidationErrors) -> AppError {
        AppError::ValidationError(error.to_string())
    }
}

/// Any JWT decoding failure collapses to the same 401 so that callers cannot
/// tell an expired token from a forged one.
impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(error: jsonwebtoken::errors::Error) -> AppError {
        log::debug!("Rejected bearer token: {:?}", error.kind());
        AppError::Unauthorized("Invalid token".into())
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        AppError::InternalServerError(format!("Password hashing failed: {}", error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_json(error: AppError) -> serde_json::Value {
        let body = to_bytes(error.error_response().into_body()).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[test]
    fn test_error_responses() {
        let error = AppError::Unauthorized("Missing token".into());
        assert_eq!(error.error_response().status(), 401);

        let error = AppError::Forbidden;
        assert_eq!(error.error_response().status(), 403);

        let error = AppError::BadRequest("Invalid credentials".into());
        assert_eq!(error.error_response().status(), 400);

        let error = AppError::ValidationError("title: length".into());
        assert_eq!(error.error_response().status(), 400);

        let error = AppError::NotFound("Task not found".into());
        assert_eq!(error.error_response().status(), 404);

        let error = AppError::DatabaseError("disk I/O error".into());
        assert_eq!(error.error_response().status(), 500);
    }

    #[actix_rt::test]
    async fn test_internal_detail_is_not_exposed() {
        let json = body_json(AppError::DatabaseError(
            "no such table: todos".into(),
        ))
        .await;
        assert_eq!(json["error"], INTERNAL_ERROR_MESSAGE);

        let json = body_json(AppError::InternalServerError("bcrypt cost".into())).await;
        assert_eq!(json["error"], INTERNAL_ERROR_MESSAGE);
    }

    #[actix_rt::test]
    async fn test_client_errors_carry_their_message() {
        let json = body_json(AppError::BadRequest("User already exists".into())).await;
        assert_eq!(json["error"], "User already exists");

        let json = body_json(AppError::Forbidden).await;
        assert_eq!(json["error"], "Forbidden");
    }

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let error: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(error, AppError::NotFound(_)));
    }
}

use actix_web::dev::Payload;
use actix_web::{Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};

use crate::auth::token::Claims;
use crate::error::AppError;

/// The identity of the caller, as proven by a validated bearer token.
///
/// `AuthMiddleware` inserts this into the request extensions; handlers on
/// protected routes take it as an argument. If it is missing the extractor
/// fails with 401, so a handler mounted without the middleware never runs
/// anonymously.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub email: String,
}

impl From<Claims> for AuthenticatedUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            email: claims.email,
        }
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>().cloned() {
            Some(user) => ready(Ok(user)),
            None => {
                log::warn!("No authenticated user on protected path {}", req.path());
                let err = AppError::Unauthorized("Unauthorized".to_string());
                ready(Err(err.into()))
            }
        }
    }
}

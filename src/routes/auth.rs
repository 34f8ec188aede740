use crate::{
    auth::{AuthResponse, LoginRequest, RegisterRequest, INVALID_CREDENTIALS},
    error::AppError,
    models::User,
    state::AppState,
    store::users::DUPLICATE_ACCOUNT,
};
use actix_web::{post, web, HttpResponse, Responder};
use validator::Validate;

/// Register a new user
///
/// Creates an account and returns the public user record with a token.
/// A second registration with the same email fails with 400.
#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    register_data: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    register_data.validate()?;
    let request = register_data.into_inner();

    if state.users.find_by_email(&request.email).await?.is_some() {
        return Err(AppError::BadRequest(DUPLICATE_ACCOUNT.into()));
    }

    let password_hash = state.hasher.hash_password(&request.password)?;
    let user = User::new(request.name, request.email, password_hash);
    state.users.insert(&user).await?;
    log::info!("Registered user {}", user.id);

    let token = state.tokens.issue_token(&user)?;
    Ok(HttpResponse::Ok().json(AuthResponse {
        user: user.summary(),
        token,
    }))
}

/// Login user
///
/// Unknown email and wrong password produce the same 400 response.
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    let user = state.users.find_by_email(&login_data.email).await?;
    let verified = match &user {
        Some(user) => state
            .hasher
            .verify_password(&login_data.password, &user.password_hash)?,
        None => state.hasher.verify_nothing(&login_data.password),
    };

    let user = match user {
        Some(user) if verified => user,
        _ => {
            log::debug!("Failed login attempt");
            return Err(AppError::BadRequest(INVALID_CREDENTIALS.into()));
        }
    };

    let token = state.tokens.issue_token(&user)?;
    Ok(HttpResponse::Ok().json(AuthResponse {
        user: user.summary(),
        token,
    }))
}

#![allow(dead_code)]

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::middleware::Logger;
use actix_web::{http::header, test, web, App, Error};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use todo_service::auth::AuthResponse;
use todo_service::routes::{self, health};
use todo_service::{db, AppState};

pub const TEST_SECRET: &str = "integration_test_secret_0123456789";
/// Lowest bcrypt cost; registration would otherwise dominate test time.
pub const TEST_BCRYPT_COST: u32 = 4;

pub struct TestUser {
    pub id: String,
    pub token: String,
}

pub async fn test_pool() -> SqlitePool {
    let pool = db::connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");
    db::migrate(&pool).await.expect("Failed to migrate test database");
    pool
}

pub fn test_state(pool: SqlitePool) -> web::Data<AppState> {
    web::Data::new(AppState::new(pool, TEST_SECRET, TEST_BCRYPT_COST))
}

/// Builds the full application, wired the same way as `main`.
pub async fn init_app(
    state: web::Data<AppState>,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error> {
    test::init_service(
        App::new()
            .app_data(state)
            .wrap(routes::cors())
            .wrap(Logger::default())
            .service(health::health)
            .service(web::scope("/api").configure(routes::config)),
    )
    .await
}

pub async fn register_user(
    app: &impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error>,
    name: &str,
    email: &str,
    password: &str,
) -> Result<TestUser, String> {
    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "name": name,
            "email": email,
            "password": password
        }))
        .to_request();
    let resp = test::call_service(app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;

    if !status.is_success() {
        return Err(format!(
            "Failed to register user. Status: {}. Body: {}",
            status,
            String::from_utf8_lossy(&body)
        ));
    }
    let auth: AuthResponse = serde_json::from_slice(&body)
        .map_err(|e| format!("Failed to parse registration response: {}", e))?;

    Ok(TestUser {
        id: auth.user.id,
        token: auth.token,
    })
}

pub fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", token))
}

pub async fn json_body<B: MessageBody>(resp: ServiceResponse<B>) -> Value {
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).unwrap_or_else(|e| {
        panic!(
            "Response was not JSON ({}): {:?}",
            e,
            String::from_utf8_lossy(&body)
        )
    })
}

use actix_web::{get, web, HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;

use crate::{db, state::AppState};

/// Health check endpoint
///
/// Reports whether the database answers. Public, outside `/api`.
#[get("/health")]
pub async fn health(state: web::Data<AppState>) -> impl Responder {
    match db::ping(&state.pool).await {
        Ok(()) => HttpResponse::Ok().json(json!({
            "status": "ok",
            "database": "ok",
            "timestamp": Utc::now()
        })),
        Err(e) => {
            log::error!("Health check failed: {}", e);
            HttpResponse::ServiceUnavailable().json(json!({
                "status": "degraded",
                "database": "unavailable",
                "timestamp": Utc::now()
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support::memory_pool;
    use actix_web::{http::StatusCode, test, App};

    async fn call_health(state: AppState) -> (StatusCode, serde_json::Value) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(health),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body = test::read_body(resp).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[actix_rt::test]
    async fn test_health_endpoint() {
        let state = AppState::new(memory_pool().await, "health_test_secret_0123456789abcd", 4);
        let (status, json) = call_health(state).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
        assert_eq!(json["database"], "ok");
        assert!(json["timestamp"].is_string());
    }

    #[actix_rt::test]
    async fn test_health_reports_closed_pool() {
        let pool = memory_pool().await;
        pool.close().await;
        let state = AppState::new(pool, "health_test_secret_0123456789abcd", 4);
        let (status, json) = call_health(state).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json["database"], "unavailable");
    }
}

pub mod auth;
pub mod health;
pub mod todos;

use actix_cors::Cors;
use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::auth::AuthMiddleware;
use crate::error::AppError;

/// Registers the `/api` routes. Everything under `/todos` sits behind
/// [`AuthMiddleware`]; `/auth` is public.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(
            web::scope("/auth")
                .service(auth::login)
                .service(auth::register),
        )
        .service(
            web::scope("/todos")
                .wrap(AuthMiddleware)
                .service(todos::list_todos)
                .service(todos::create_todo)
                .service(todos::get_todo)
                .service(todos::update_todo)
                .service(todos::delete_todo),
        );
}

/// Permissive CORS: any origin, method and header.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}

/// Turns body deserialization failures into `AppError::BadRequest` so they
/// share the JSON error shape.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        let message = match &err {
            JsonPayloadError::ContentType => "Expected a JSON body".to_string(),
            JsonPayloadError::Deserialize(e) => format!("Invalid request body: {}", e),
            _ => "Invalid request body".to_string(),
        };
        AppError::BadRequest(message).into()
    })
}

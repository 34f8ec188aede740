use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use std::io;

use todo_service::config::Config;
use todo_service::routes::{self, health};
use todo_service::{db, AppState};

fn startup_error<E: std::fmt::Display>(context: &str, err: E) -> io::Error {
    log::error!("{}: {}", context, err);
    io::Error::new(io::ErrorKind::Other, format!("{}: {}", context, err))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| startup_error("Invalid configuration", e))?;

    let pool = db::connect(&config.database_url)
        .await
        .map_err(|e| startup_error("Failed to connect to database", e))?;
    db::migrate(&pool)
        .await
        .map_err(|e| startup_error("Failed to apply migrations", e))?;

    let state = web::Data::new(AppState::from_config(pool, &config));

    log::info!("Starting todo service at {}", config.server_url());
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(routes::cors())
            .wrap(Logger::default())
            .service(health::health)
            .service(web::scope("/api").configure(routes::config))
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await
}

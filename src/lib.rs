#![doc = "The `todo_service` library crate."]
#![doc = ""]
#![doc = "A multi-tenant to-do list API: users register and log in, receive a signed"]
#![doc = "bearer token, and manage tasks that only they can see or change. The binary"]
#![doc = "(`main.rs`) loads configuration, prepares the SQLite database and serves the"]
#![doc = "routes declared here."]

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;

pub use crate::error::AppError;
pub use crate::state::AppState;

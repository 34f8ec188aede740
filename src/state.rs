use sqlx::SqlitePool;

use crate::auth::{PasswordHasher, TokenService};
use crate::config::Config;
use crate::store::{TaskStore, UserStore};

/// Everything a handler needs, built once at startup and shared through
/// `web::Data`.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub users: UserStore,
    pub tasks: TaskStore,
    pub tokens: TokenService,
    pub hasher: PasswordHasher,
}

impl AppState {
    pub fn new(pool: SqlitePool, jwt_secret: &str, bcrypt_cost: u32) -> Self {
        Self {
            users: UserStore::new(pool.clone()),
            tasks: TaskStore::new(pool.clone()),
            pool,
            tokens: TokenService::new(jwt_secret),
            hasher: PasswordHasher::new(bcrypt_cost),
        }
    }

    pub fn from_config(pool: SqlitePool, config: &Config) -> Self {
        Self::new(pool, &config.jwt_secret, config.bcrypt_cost)
    }
}

use std::env;
use std::fmt;

/// Shortest accepted HMAC signing secret, in bytes.
pub const MIN_JWT_SECRET_LEN: usize = 32;

/// Runtime configuration, read once at startup and passed down explicitly.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_port: u16,
    pub server_host: String,
    pub jwt_secret: String,
    pub bcrypt_cost: u32,
}

/// Reasons the service refuses to start.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, value: String },
    WeakSecret,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "{} must be set", key),
            ConfigError::Invalid { key, value } => write!(f, "{} has invalid value {:?}", key, value),
            ConfigError::WeakSecret => write!(
                f,
                "JWT_SECRET must be at least {} bytes long",
                MIN_JWT_SECRET_LEN
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;
        if jwt_secret.len() < MIN_JWT_SECRET_LEN {
            return Err(ConfigError::WeakSecret);
        }

        let server_port = match lookup("SERVER_PORT") {
            Some(value) => value.parse::<u16>().map_err(|_| ConfigError::Invalid {
                key: "SERVER_PORT",
                value,
            })?,
            None => 8080,
        };

        let bcrypt_cost = match lookup("BCRYPT_COST") {
            Some(value) => match value.parse::<u32>() {
                Ok(cost) if (4..=31).contains(&cost) => cost,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "BCRYPT_COST",
                        value,
                    })
                }
            },
            None => bcrypt::DEFAULT_COST,
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://todo.db".to_string()),
            server_port,
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            jwt_secret,
            bcrypt_cost,
        })
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }
}

//! Server configuration read from the process environment.
//!
//! Values are looked up through an injectable function so tests can supply
//! a fixed map instead of mutating the real environment.

use std::net::SocketAddr;
use std::num::NonZeroU32;
use thiserror::Error;

/// Environment variable holding the listen address.
pub const BIND_ADDR_VAR: &str = "TASKLIST_BIND_ADDR";
/// Environment variable selecting PostgreSQL storage.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
/// Environment variable sizing the database connection pool.
pub const POOL_SIZE_VAR: &str = "TASKLIST_DB_POOL_SIZE";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_POOL_SIZE: u32 = 8;

/// Errors raised while reading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The listen address is not a socket address.
    #[error("TASKLIST_BIND_ADDR must be a socket address such as 127.0.0.1:8080, got `{0}`")]
    InvalidBindAddress(String),

    /// The pool size is not a positive integer.
    #[error("TASKLIST_DB_POOL_SIZE must be a positive integer, got `{0}`")]
    InvalidPoolSize(String),

    /// The database URL is present but blank.
    #[error("DATABASE_URL must not be empty when set")]
    EmptyDatabaseUrl,
}

/// Storage backend selected at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// Process-local store; data is lost on restart.
    Memory,
    /// PostgreSQL through a pooled Diesel connection.
    Postgres {
        /// Connection URL.
        database_url: String,
        /// Maximum number of pooled connections.
        pool_size: NonZeroU32,
    },
}

/// Runtime configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the server listens on.
    pub bind_address: SocketAddr,
    /// Storage backend.
    pub storage: StorageBackend,
}

impl ServerConfig {
    /// Reads configuration from the process environment, loading a `.env`
    /// file first when one exists.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds configuration from `lookup`, which maps variable names to
    /// values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is present but malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_address = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
        let bind_address = raw_address
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddress(raw_address.clone()))?;

        let storage = match lookup(DATABASE_URL_VAR) {
            None => StorageBackend::Memory,
            Some(url) if url.trim().is_empty() => return Err(ConfigError::EmptyDatabaseUrl),
            Some(url) => StorageBackend::Postgres {
                database_url: url.trim().to_owned(),
                pool_size: parse_pool_size(lookup(POOL_SIZE_VAR))?,
            },
        };

        Ok(Self {
            bind_address,
            storage,
        })
    }
}

fn parse_pool_size(raw: Option<String>) -> Result<NonZeroU32, ConfigError> {
    let Some(value) = raw else {
        return NonZeroU32::new(DEFAULT_POOL_SIZE)
            .ok_or_else(|| ConfigError::InvalidPoolSize(DEFAULT_POOL_SIZE.to_string()));
    };
    value
        .trim()
        .parse::<NonZeroU32>()
        .map_err(|_| ConfigError::InvalidPoolSize(value))
}

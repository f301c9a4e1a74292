// src/config.rs

use std::env;
use dotenvy::dotenv;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    /// Token lifetime in seconds.
    pub jwt_expiration: u64,
    pub port: u16,
    pub rust_log: String,
    pub seed_username: Option<String>,
    pub seed_password: Option<String>,
}

impl Config {
    /// Reads the configuration from the process environment (and `.env`, if present).
    ///
    /// Fails only when `JWT_SECRET` is missing; everything else has a default.
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv().ok();

        let jwt_secret = env::var("JWT_SECRET")?;

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://bloglist.db?mode=rwc".to_string());

        let jwt_expiration = env::var("JWT_EXPIRATION")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3600);

        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3003);

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            database_url,
            jwt_secret,
            jwt_expiration,
            port,
            rust_log,
            seed_username: env::var("SEED_USERNAME").ok(),
            seed_password: env::var("SEED_PASSWORD").ok(),
        })
    }
}

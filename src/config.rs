use crate::error::{Error, Result};
use std::env;

const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:3000";
/// One hour.
const DEFAULT_TOKEN_TTL_SECS: u64 = 60 * 60;
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub database_url: String,
    pub jwt_secret: String,
    pub token_ttl_secs: u64,
    pub database_max_connections: u32,
}

impl Config {
    /// Reads the process environment, loading `.env` first when present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server_address: get_env_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS),
            database_url: get_env("DATABASE_URL")?,
            jwt_secret: get_env("JWT_SECRET")?,
            token_ttl_secs: get_env_parse_or("TOKEN_TTL_SECS", DEFAULT_TOKEN_TTL_SECS)?,
            database_max_connections: get_env_parse_or(
                "DATABASE_MAX_CONNECTIONS",
                DEFAULT_DATABASE_MAX_CONNECTIONS,
            )?,
        })
    }

    /// Configuration with no database, for wiring the router against other data sources.
    pub fn with_secret(jwt_secret: impl Into<String>) -> Self {
        Self {
            server_address: DEFAULT_SERVER_ADDRESS.to_string(),
            database_url: String::new(),
            jwt_secret: jwt_secret.into(),
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
            database_max_connections: DEFAULT_DATABASE_MAX_CONNECTIONS,
        }
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // All env mutations live in one test so parallel tests never race on them.
    #[test]
    fn from_env_reads_required_and_defaults() {
        env::remove_var("TOKEN_TTL_SECS");
        env::remove_var("DATABASE_MAX_CONNECTIONS");
        env::set_var("DATABASE_URL", "postgres://localhost/messagely_test");
        env::set_var("JWT_SECRET", "s3cret");

        let config = Config::from_env().unwrap();
        assert_eq!(config.jwt_secret, "s3cret");
        assert_eq!(config.token_ttl_secs, 3600);
        assert_eq!(config.database_max_connections, 10);

        env::set_var("TOKEN_TTL_SECS", "soon");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, Error::Config(msg) if msg.contains("TOKEN_TTL_SECS")));
        env::remove_var("TOKEN_TTL_SECS");

        env::remove_var("JWT_SECRET");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, Error::Config(msg) if msg.contains("JWT_SECRET")));
    }
}

use std::env;

use derive_more::Display;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_POOL_SIZE: u32 = 10;

#[derive(Debug, Display, PartialEq)]
pub enum ConfigError {
    #[display(fmt = "{} must be set", _0)]
    Missing(&'static str),
    #[display(fmt = "{} is invalid: {}", _0, _1)]
    Invalid(&'static str, String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    /// Only origin allowed by CORS; any origin when unset.
    pub client_host: Option<String>,
    pub pool_size: u32,
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        Config::from_vars(|key| env::var(key).ok())
    }

    fn from_vars<F>(var: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = var("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let pool_size = match var("DB_POOL_SIZE") {
            Some(size) => match size.parse::<u32>() {
                Ok(size) if size > 0 => size,
                _ => return Err(ConfigError::Invalid("DB_POOL_SIZE", size)),
            },
            None => DEFAULT_POOL_SIZE,
        };

        Ok(Config {
            database_url,
            bind_address: var("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            client_host: var("CLIENT_HOST").filter(|host| !host.is_empty()),
            pool_size,
        })
    }
}

use std::{fmt::Display, path::PathBuf, str::FromStr, time::Duration};

use crate::server::{
    connection::ConnectionDescriptor,
    error::{config::ConfigError, AppError},
};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_STATIC_DIR: &str = "public";
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

pub struct Config {
    pub database_url: String,
    /// Size of the shared connection pool; `0` opens a fresh connection per request.
    pub database_pool_size: u32,
    pub database_connect_timeout: Duration,

    pub host: String,
    pub port: u16,

    /// Directory the static front-end is served from.
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, or `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All variables present and well-formed
    /// - `Err(AppError::ConfigErr)` - `DATABASE_URL` is unset or a numeric variable
    ///   does not parse
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let connect_timeout_secs = parse_var(
            &lookup,
            "DATABASE_CONNECT_TIMEOUT_SECS",
            DEFAULT_CONNECT_TIMEOUT_SECS,
        )?;

        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            database_pool_size: parse_var(&lookup, "DATABASE_POOL_SIZE", 0)?,
            database_connect_timeout: Duration::from_secs(connect_timeout_secs),
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_var(&lookup, "PORT", DEFAULT_PORT)?,
            static_dir: lookup("STATIC_DIR")
                .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string())
                .into(),
        })
    }

    /// Address the HTTP listener binds to, as `host:port`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn connection_descriptor(&self) -> ConnectionDescriptor {
        ConnectionDescriptor {
            url: self.database_url.clone(),
            connect_timeout: self.database_connect_timeout,
        }
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value: value.clone(),
                reason: e.to_string(),
            }),
    }
}

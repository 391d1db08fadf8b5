use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use thiserror::Error;

use crate::models::BudgetPolicy;
use crate::utils::error::ErrorMode;

pub mod cors;

pub use cors::{create_cors_layer, AllowedOrigins};

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 3001;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid value for {name}: '{value}'")]
    Invalid { name: &'static str, value: String },
}

/// Process-wide settings, read once at startup and passed down by value.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub run_migrations: bool,
    pub error_mode: ErrorMode,
    pub budget_policy: BudgetPolicy,
    pub allowed_origins: AllowedOrigins,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let host = parse_or(&lookup, "SERVER_HOST", || DEFAULT_HOST)?;
        let port = parse_or(&lookup, "SERVER_PORT", || DEFAULT_PORT)?;
        let max_connections = non_zero(
            "DB_MAX_CONNECTIONS",
            parse_or(&lookup, "DB_MAX_CONNECTIONS", || DEFAULT_MAX_CONNECTIONS)?,
        )?;
        // A zero timeout fails every acquire immediately.
        let acquire_timeout_secs = non_zero(
            "DB_ACQUIRE_TIMEOUT_SECS",
            parse_or(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", || DEFAULT_ACQUIRE_TIMEOUT_SECS)?,
        )?;
        let run_migrations = parse_flag(&lookup, "RUN_MIGRATIONS", true)?;

        let error_mode = match lookup("ERROR_RESPONSE_MODE") {
            None => ErrorMode::default(),
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "ERROR_RESPONSE_MODE",
                value,
            })?,
        };

        let budget_policy = if parse_flag(&lookup, "ZERO_BUDGET_AS_ABSENT", true)? {
            BudgetPolicy::ZeroAsAbsent
        } else {
            BudgetPolicy::Preserve
        };

        let allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|value| AllowedOrigins::parse(&value))
            .unwrap_or_default();

        Ok(Self {
            database_url,
            host,
            port,
            max_connections,
            acquire_timeout: Duration::from_secs(acquire_timeout_secs),
            run_migrations,
            error_mode,
            budget_policy,
            allowed_origins,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<F, T, D>(lookup: &F, name: &'static str, default: D) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    D: FnOnce() -> T,
{
    match lookup(name) {
        None => Ok(default()),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

fn non_zero<T>(name: &'static str, value: T) -> Result<T, ConfigError>
where
    T: Default + PartialEq + ToString,
{
    if value == T::default() {
        Err(ConfigError::Invalid {
            name,
            value: value.to_string(),
        })
    } else {
        Ok(value)
    }
}

fn parse_flag<F>(lookup: &F, name: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => match value.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::Invalid { name, value }),
        },
    }
}

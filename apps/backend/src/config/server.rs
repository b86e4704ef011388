use std::env;

use crate::error::AppError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 60 * 60;
pub const DEFAULT_MAX_ATTEMPTS: usize = 3;

/// Runtime settings for the HTTP server, read from `TTT_*` variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub token_ttl_secs: u64,
    /// Compare-and-swap attempts per join/move before giving up with `CONFLICT`.
    pub max_attempts: usize,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("TTT_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_or("TTT_PORT", lookup("TTT_PORT"), DEFAULT_PORT)?;

        let jwt_secret = lookup("TTT_JWT_SECRET")
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| AppError::config("TTT_JWT_SECRET must be set"))?;

        let token_ttl_secs = parse_or(
            "TTT_TOKEN_TTL_SECS",
            lookup("TTT_TOKEN_TTL_SECS"),
            DEFAULT_TOKEN_TTL_SECS,
        )?;
        if token_ttl_secs == 0 {
            return Err(AppError::config("TTT_TOKEN_TTL_SECS must be positive"));
        }

        let max_attempts = parse_or(
            "TTT_MAX_ATTEMPTS",
            lookup("TTT_MAX_ATTEMPTS"),
            DEFAULT_MAX_ATTEMPTS,
        )?;
        if max_attempts == 0 {
            return Err(AppError::config("TTT_MAX_ATTEMPTS must be at least 1"));
        }

        Ok(Self {
            host,
            port,
            jwt_secret,
            token_ttl_secs,
            max_attempts,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &str,
    raw: Option<String>,
    default: T,
) -> Result<T, AppError> {
    match raw {
        None => Ok(default),
        Some(s) => s
            .trim()
            .parse()
            .map_err(|_| AppError::config(format!("{key} has an invalid value: '{s}'"))),
    }
}

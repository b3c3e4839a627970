use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use rand::Rng;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a number, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
    #[error("caption delay range is empty: {min_ms}ms..{max_ms}ms")]
    EmptyDelayRange { min_ms: u64, max_ms: u64 },
    #[error("invalid bind address {0:?}")]
    InvalidBindAddress(String),
}

/// Half-open `[min, max)` range for the simulated inference latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayRange {
    min_ms: u64,
    max_ms: u64,
}

impl DelayRange {
    pub fn new(min_ms: u64, max_ms: u64) -> Result<Self, ConfigError> {
        if min_ms >= max_ms {
            return Err(ConfigError::EmptyDelayRange { min_ms, max_ms });
        }
        Ok(Self { min_ms, max_ms })
    }

    pub fn min_ms(&self) -> u64 {
        self.min_ms
    }

    pub fn max_ms(&self) -> u64 {
        self.max_ms
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        Duration::from_millis(rng.gen_range(self.min_ms..self.max_ms))
    }
}

impl Default for DelayRange {
    fn default() -> Self {
        Self {
            min_ms: 800,
            max_ms: 2000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub ping_message: String,
    pub delay: DelayRange,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            ping_message: "ping".to_string(),
            delay: DelayRange::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset or blank keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        let port = parse_or(get("PORT"), "PORT", defaults.port)?;
        let min_ms = parse_or(
            get("CAPTION_DELAY_MIN_MS"),
            "CAPTION_DELAY_MIN_MS",
            defaults.delay.min_ms,
        )?;
        let max_ms = parse_or(
            get("CAPTION_DELAY_MAX_MS"),
            "CAPTION_DELAY_MAX_MS",
            defaults.delay.max_ms,
        )?;

        Ok(Self {
            host: get("HOST").unwrap_or(defaults.host),
            port,
            log_level: get("LOG_LEVEL").unwrap_or(defaults.log_level),
            // The ping message is returned verbatim, so only an unset key falls back.
            ping_message: lookup("PING_MESSAGE").unwrap_or(defaults.ping_message),
            delay: DelayRange::new(min_ms, max_ms)?,
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ConfigError::InvalidBindAddress(addr))
    }
}

fn parse_or<T: FromStr>(
    value: Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { key, value }),
        None => Ok(default),
    }
}

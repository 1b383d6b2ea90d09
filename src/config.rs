//! Environment-sourced configuration for the homework watcher.
use std::time::Duration;
use thiserror::Error;

/// How long to wait between poll iterations unless overridden.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(600);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

/// Secrets and settings resolved once at startup, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: i64,
    pub poll_interval: Duration,
}

/// Load configuration from the process environment.
pub fn from_env() -> Result<Config, ConfigError> {
    load(|name| std::env::var(name).ok())
}

/// Load configuration through an explicit lookup. Each field is resolved by
/// name and validated here, in one place; `main` treats any error as fatal.
pub fn load<F>(lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let practicum_token = require(&lookup, "PRACTICUM_TOKEN")?;
    let telegram_token = require(&lookup, "TELEGRAM_TOKEN")?;

    let telegram_chat_id = require(&lookup, "TELEGRAM_CHAT_ID")?
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid("TELEGRAM_CHAT_ID must be an integer chat id"))?;

    let poll_interval = match lookup("POLL_INTERVAL_SECONDS") {
        Some(raw) => {
            let secs: u64 = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("POLL_INTERVAL_SECONDS must be an integer"))?;
            if secs == 0 {
                return Err(ConfigError::Invalid("POLL_INTERVAL_SECONDS must be > 0"));
            }
            Duration::from_secs(secs)
        }
        None => DEFAULT_POLL_INTERVAL,
    };

    Ok(Config {
        practicum_token,
        telegram_token,
        telegram_chat_id,
        poll_interval,
    })
}

fn require<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

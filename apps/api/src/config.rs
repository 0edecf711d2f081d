use std::time::Duration;

use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub primary_model: String,
    pub fallback_model: String,
    pub generator_timeout: Duration,
    pub rate_limit: RateLimitConfig,
    /// How often stale rate-limit entries are swept from the store.
    pub rate_limit_sweep: Duration,
    pub port: u16,
    pub rust_log: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub window: Duration,
    pub max_requests: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            window: Duration::from_secs(60),
            max_requests: 10,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds and validates the config from any key → value source.
    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Config {
            gemini_api_key: lookup("GEMINI_API_KEY").with_context(|| {
                "Required environment variable 'GEMINI_API_KEY' is not set".to_string()
            })?,
            primary_model: lookup("GEMINI_PRIMARY_MODEL")
                .unwrap_or_else(|| "gemini-1.5-pro".to_string()),
            fallback_model: lookup("GEMINI_FALLBACK_MODEL")
                .unwrap_or_else(|| "gemini-1.0-pro".to_string()),
            generator_timeout: Duration::from_secs(parse_var(
                &lookup,
                "GENERATOR_TIMEOUT_SECS",
                10,
            )?),
            rate_limit: RateLimitConfig {
                window: Duration::from_secs(parse_var(&lookup, "RATE_LIMIT_WINDOW_SECS", 60)?),
                max_requests: parse_var(&lookup, "RATE_LIMIT_MAX_REQUESTS", 10)?,
            },
            rate_limit_sweep: Duration::from_secs(parse_var(
                &lookup,
                "RATE_LIMIT_SWEEP_SECS",
                300,
            )?),
            port: parse_var(&lookup, "PORT", 8080)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        };

        config.validate()?;
        Ok(config)
    }

    /// Rejects zero durations and caps. A zero sweep period would panic the
    /// sweeper's interval; a zero timeout would fail every generator call.
    pub fn validate(&self) -> Result<()> {
        if self.rate_limit.window.is_zero() {
            bail!("RATE_LIMIT_WINDOW_SECS must be greater than zero");
        }
        if self.rate_limit.max_requests == 0 {
            bail!("RATE_LIMIT_MAX_REQUESTS must be greater than zero");
        }
        if self.rate_limit_sweep.is_zero() {
            bail!("RATE_LIMIT_SWEEP_SECS must be greater than zero");
        }
        if self.generator_timeout.is_zero() {
            bail!("GENERATOR_TIMEOUT_SECS must be greater than zero");
        }
        Ok(())
    }
}

fn parse_var<T, F>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}

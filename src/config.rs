//! Configuration module
//!
//! Values come from the environment (after loading `.env`), with defaults
//! for everything except the database URL.

use std::str::FromStr;
use std::time::Duration;

use crate::pricing::format::{CurrencyFormat, DEFAULT_CURRENCY_CODE, DEFAULT_LOCALE};

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required variable: {0}")]
    Missing(&'static str),

    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string for listing storage
    pub database_url: String,
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Fallback log filter when `RUST_LOG` is unset
    pub log_level: String,
    /// Formatting used for `formatted_*` response fields
    pub currency: CurrencyFormat,
    pub listing_cache_ttl: Duration,
    pub cache_warm_interval: Duration,
    /// Reject quotes and drafts whose start date is before today
    pub reject_past_start_dates: bool,
    pub db_max_connections: u32,
}

impl Config {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            currency: CurrencyFormat::new(DEFAULT_LOCALE, DEFAULT_CURRENCY_CODE),
            listing_cache_ttl: Duration::from_secs(15 * 60),
            cache_warm_interval: Duration::from_secs(10 * 60),
            reject_past_start_dates: true,
            db_max_connections: 5,
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let defaults = Self::new(database_url);

        let locale = lookup("CURRENCY_LOCALE").unwrap_or(defaults.currency.locale);
        let currency_code = lookup("CURRENCY_CODE").unwrap_or(defaults.currency.currency_code);

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "PORT", defaults.port)?,
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            currency: CurrencyFormat::new(locale, currency_code),
            listing_cache_ttl: parse_secs_or(
                &lookup,
                "RATE_CARD_CACHE_TTL_SECS",
                defaults.listing_cache_ttl,
            )?,
            cache_warm_interval: parse_secs_or(
                &lookup,
                "CACHE_WARM_INTERVAL_SECS",
                defaults.cache_warm_interval,
            )?,
            reject_past_start_dates: parse_or(
                &lookup,
                "REJECT_PAST_START_DATES",
                defaults.reject_past_start_dates,
            )?,
            db_max_connections: parse_or(
                &lookup,
                "DB_MAX_CONNECTIONS",
                defaults.db_max_connections,
            )?,
            database_url: defaults.database_url,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

// Zero is rejected: the warmer's `interval` panics on it and a zero TTL
// disables the cache.
fn parse_secs_or<F>(
    lookup: &F,
    name: &'static str,
    default: Duration,
) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match parse_or(lookup, name, default.as_secs())? {
        0 => Err(ConfigError::Invalid {
            name,
            value: "0".to_string(),
        }),
        secs => Ok(Duration::from_secs(secs)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[("DATABASE_URL", "postgres://db/rent")])).unwrap();
        assert_eq!(config.address(), "0.0.0.0:8080");
        assert_eq!(config.currency, CurrencyFormat::new("en-IN", "INR"));
        assert_eq!(config.listing_cache_ttl, Duration::from_secs(900));
        assert!(config.reject_past_start_dates);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://db/rent"),
            ("PORT", "9100"),
            ("CURRENCY_LOCALE", "en-US"),
            ("CURRENCY_CODE", "usd"),
            ("REJECT_PAST_START_DATES", "false"),
            ("RATE_CARD_CACHE_TTL_SECS", "60"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9100);
        assert_eq!(config.currency.currency_code, "USD");
        assert!(!config.reject_past_start_dates);
        assert_eq!(config.listing_cache_ttl, Duration::from_secs(60));
    }

    #[test]
    fn test_missing_database_url() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("DATABASE_URL")));
    }

    #[test]
    fn test_invalid_port() {
        let err = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://db/rent"),
            ("PORT", "eighty"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_zero_durations_rejected() {
        for name in ["CACHE_WARM_INTERVAL_SECS", "RATE_CARD_CACHE_TTL_SECS"] {
            let err = Config::from_lookup(lookup(&[
                ("DATABASE_URL", "postgres://db/rent"),
                (name, "0"),
            ]))
            .unwrap_err();
            assert!(
                matches!(err, ConfigError::Invalid { name: n, .. } if n == name),
                "{name}: {err}"
            );
        }
    }
}

use std::fmt::Display;
use std::str::FromStr;

use thiserror::Error;

const DEFAULT_PORT: &str = "4000";
const DEFAULT_DATABASE_URL: &str = "sqlite://foods.db";
const DEFAULT_MAX_CONNECTIONS: &str = "5";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for `{key}`: {reason}")]
    InvalidValue { key: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
}

impl Config {
    /// Reads the configuration from the environment, after loading `.env` when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(|key| dotenvy::var(key).ok())
    }

    /// Builds the configuration from any key lookup; missing keys fall back to defaults.
    pub fn load<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            port: try_load(&lookup, "PORT", DEFAULT_PORT)?,
            database_url: try_load(&lookup, "DATABASE_URL", DEFAULT_DATABASE_URL)?,
            database_max_connections: try_load(
                &lookup,
                "DATABASE_MAX_CONNECTIONS",
                DEFAULT_MAX_CONNECTIONS,
            )?,
        })
    }
}

fn try_load<F, T>(lookup: &F, key: &'static str, default: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    let raw = lookup(key).unwrap_or_else(|| {
        tracing::info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        key,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();

        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::load(lookup(&[])).unwrap();

        assert_eq!(
            config,
            Config {
                port: 4000,
                database_url: "sqlite://foods.db".to_string(),
                database_max_connections: 5,
            }
        );
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = Config::load(lookup(&[
            ("PORT", "8080"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("DATABASE_MAX_CONNECTIONS", "1"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.database_max_connections, 1);
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = Config::load(lookup(&[("PORT", "four thousand")])).unwrap_err();

        let ConfigError::InvalidValue { key, .. } = err;
        assert_eq!(key, "PORT");
    }
}

//! Storage configuration read from the environment.

use std::time::Duration;

use thiserror::Error;

/// Default pool size when `DATABASE_MAX_CONNECTIONS` is unset.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Default acquire timeout when `DATABASE_ACQUIRE_TIMEOUT_SECS` is unset.
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors raised while reading storage configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is not set.
    #[error("{0} environment variable must be set")]
    Missing(&'static str),

    /// A variable is set but cannot be parsed.
    #[error("{var} is invalid: {reason}")]
    Invalid {
        /// The offending variable.
        var: &'static str,
        /// Why parsing failed.
        reason: String,
    },
}

/// Fixed deployment parameters for the storage client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Upper bound on pooled connections.
    pub max_connections: u32,
    /// How long a caller waits for a pooled connection before failing.
    pub acquire_timeout: Duration,
}

impl StorageConfig {
    /// Creates a configuration with default pool settings.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }

    /// Reads the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `DATABASE_URL` is missing or a numeric
    /// variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `DATABASE_URL` is missing or empty, or a
    /// numeric variable does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => parse_var("DATABASE_MAX_CONNECTIONS", &raw)?,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                var: "DATABASE_MAX_CONNECTIONS",
                reason: "must be at least 1".to_owned(),
            });
        }

        let acquire_timeout = match lookup("DATABASE_ACQUIRE_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(parse_var("DATABASE_ACQUIRE_TIMEOUT_SECS", &raw)?),
            None => DEFAULT_ACQUIRE_TIMEOUT,
        };

        Ok(Self {
            database_url,
            max_connections,
            acquire_timeout,
        })
    }
}

fn parse_var<T>(var: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        var,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |var: &str| vars.get(var).cloned()
    }

    #[test]
    fn test_from_lookup_applies_defaults() {
        let config =
            StorageConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://db/events")]))
                .unwrap();

        assert_eq!(config, StorageConfig::new("postgres://db/events"));
    }

    #[test]
    fn test_from_lookup_reads_pool_settings() {
        let config = StorageConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db/events"),
            ("DATABASE_MAX_CONNECTIONS", "25"),
            ("DATABASE_ACQUIRE_TIMEOUT_SECS", "2"),
        ]))
        .unwrap();

        assert_eq!(config.max_connections, 25);
        assert_eq!(config.acquire_timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_from_lookup_requires_database_url() {
        let result = StorageConfig::from_lookup(lookup_from(&[]));

        assert_eq!(result, Err(ConfigError::Missing("DATABASE_URL")));
    }

    #[test]
    fn test_from_lookup_rejects_blank_database_url() {
        let result = StorageConfig::from_lookup(lookup_from(&[("DATABASE_URL", "  ")]));

        assert_eq!(result, Err(ConfigError::Missing("DATABASE_URL")));
    }

    #[test]
    fn test_from_lookup_rejects_unparseable_pool_size() {
        let result = StorageConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db/events"),
            ("DATABASE_MAX_CONNECTIONS", "lots"),
        ]));

        match result {
            Err(ConfigError::Invalid { var, .. }) => assert_eq!(var, "DATABASE_MAX_CONNECTIONS"),
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn test_from_lookup_rejects_zero_pool_size() {
        let result = StorageConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db/events"),
            ("DATABASE_MAX_CONNECTIONS", "0"),
        ]));

        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                var: "DATABASE_MAX_CONNECTIONS",
                ..
            })
        ));
    }
}

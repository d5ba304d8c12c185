/// Which product store backs the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// MongoDB at the given connection string. `timeout_secs` bounds
    /// server selection and connect when dialing.
    Mongo {
        uri: String,
        database: String,
        timeout_secs: u64,
    },
    /// Process memory; contents are lost on exit.
    Memory,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("MONGO_URI not defined")]
    MissingMongoUri,

    #[error("{key} has an invalid value '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
///
/// Everything except the MongoDB connection string has a default suitable
/// for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub store: StoreBackend,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `MONGO_URI`            | required for `STORE=mongo` |
    /// | `MONGO_DB`             | `catalog`                  |
    /// | `MONGO_TIMEOUT_SECS`   | `5`                        |
    /// | `STORE`                | `mongo`                    |
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port = parse_or("PORT", lookup("PORT"), 3000u16)?;

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = parse_or(
            "REQUEST_TIMEOUT_SECS",
            lookup("REQUEST_TIMEOUT_SECS"),
            30u64,
        )?;

        let store = match lookup("STORE").as_deref().unwrap_or("mongo") {
            "mongo" => {
                let uri = lookup("MONGO_URI")
                    .filter(|uri| !uri.trim().is_empty())
                    .ok_or(ConfigError::MissingMongoUri)?;
                let database = lookup("MONGO_DB").unwrap_or_else(|| "catalog".into());
                let timeout_secs =
                    parse_or("MONGO_TIMEOUT_SECS", lookup("MONGO_TIMEOUT_SECS"), 5u64)?;
                // A dial that outlives the request deadline ends as a bare 408.
                if timeout_secs == 0 || timeout_secs >= request_timeout_secs {
                    return Err(ConfigError::Invalid {
                        key: "MONGO_TIMEOUT_SECS",
                        value: timeout_secs.to_string(),
                    });
                }
                StoreBackend::Mongo {
                    uri,
                    database,
                    timeout_secs,
                }
            }
            "memory" => StoreBackend::Memory,
            other => {
                return Err(ConfigError::Invalid {
                    key: "STORE",
                    value: other.to_string(),
                })
            }
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            store,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn missing_mongo_uri_is_fatal() {
        assert_matches!(load(&[]), Err(ConfigError::MissingMongoUri));
        assert_matches!(load(&[("MONGO_URI", "  ")]), Err(ConfigError::MissingMongoUri));
    }

    #[test]
    fn defaults_applied() {
        let config = load(&[("MONGO_URI", "mongodb://localhost:27017")]).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.cors_origins, vec!["http://localhost:3000"]);
        assert_eq!(
            config.store,
            StoreBackend::Mongo {
                uri: "mongodb://localhost:27017".into(),
                database: "catalog".into(),
                timeout_secs: 5,
            }
        );
    }

    #[test]
    fn memory_store_needs_no_uri() {
        let config = load(&[("STORE", "memory"), ("PORT", "8080")]).unwrap();
        assert_eq!(config.store, StoreBackend::Memory);
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn invalid_values_are_reported() {
        assert_matches!(
            load(&[("STORE", "memory"), ("PORT", "eighty")]),
            Err(ConfigError::Invalid { key: "PORT", .. })
        );
        assert_matches!(
            load(&[("STORE", "redis")]),
            Err(ConfigError::Invalid { key: "STORE", .. })
        );
    }

    #[test]
    fn mongo_timeout_must_stay_below_request_timeout() {
        let uri = ("MONGO_URI", "mongodb://localhost:27017");

        let config = load(&[uri, ("MONGO_TIMEOUT_SECS", "2")]).unwrap();
        assert_matches!(config.store, StoreBackend::Mongo { timeout_secs: 2, .. });

        assert_matches!(
            load(&[uri, ("MONGO_TIMEOUT_SECS", "30")]),
            Err(ConfigError::Invalid { key: "MONGO_TIMEOUT_SECS", .. })
        );
        assert_matches!(
            load(&[uri, ("REQUEST_TIMEOUT_SECS", "4")]),
            Err(ConfigError::Invalid { key: "MONGO_TIMEOUT_SECS", .. })
        );
        assert_matches!(
            load(&[uri, ("MONGO_TIMEOUT_SECS", "0")]),
            Err(ConfigError::Invalid { key: "MONGO_TIMEOUT_SECS", .. })
        );
    }

    #[test]
    fn cors_origins_split_and_trimmed() {
        let config = load(&[
            ("STORE", "memory"),
            ("CORS_ORIGINS", "http://a.test, http://b.test,,"),
        ])
        .unwrap();
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
    }
}

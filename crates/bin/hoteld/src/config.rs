//! Configuration loading: optional `hotel.toml` with environment overrides.
//!
//! Every field has a default, so the server starts with no file at all
//! and listens on port 3000. Environment variables win over file values.

use serde::Deserialize;

const CONFIG_FILE: &str = "hotel.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// Database settings.
    pub database: DatabaseConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `sqlx` `SQLite` URL, e.g. `sqlite:hotel.db?mode=rwc` or `sqlite::memory:`.
    pub url: String,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing-subscriber` filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:hotel.db?mode=rwc".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "hoteld=info,hotel=info,tower_http=debug".to_string(),
        }
    }
}

impl Config {
    /// Read `hotel.toml` from the working directory (if present), then apply
    /// environment-variable overrides and validate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file is unreadable or malformed, or the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file(CONFIG_FILE)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    /// Apply overrides looked up by variable name. Later keys win, so
    /// `HOTEL_BIND` beats `HOTEL_HOST`/`HOTEL_PORT` and `RUST_LOG` beats `HOTEL_LOG`.
    /// Unparseable ports are ignored.
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOTEL_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("HOTEL_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(bind) = lookup("HOTEL_BIND") {
            if let Some((host, port)) = bind.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Some(url) = lookup("HOTEL_DATABASE_URL") {
            self.database.url = url;
        }
        for key in ["HOTEL_LOG", "RUST_LOG"] {
            if let Some(filter) = lookup(key) {
                self.logging.filter = filter;
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero"));
        }
        Ok(())
    }

    /// The `host:port` pair to bind the listener to.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Validation(&'static str),
}

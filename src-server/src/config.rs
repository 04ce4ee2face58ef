//! Server configuration.
//!
//! Every setting has a default; environment variables override them:
//!
//! | Variable | Default |
//! |---|---|
//! | `TASKS_HOST` | `0.0.0.0` |
//! | `TASKS_PORT` | `3000` |
//! | `TASKS_DATABASE_PATH` | `tasks.db` |
//! | `TASKS_LOG_DIR` | `logs` |
//! | `TASKS_CORS_ALLOWED_ORIGINS` | `*` (comma-separated list) |
//! | `TASKS_STRICT_TITLES` | `false` |

use std::path::PathBuf;

/// Errors raised while reading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a {expected}: got {value:?}")]
    InvalidValue {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Runtime configuration for the task service
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// SQLite file; `:memory:` keeps everything in RAM
    pub database_path: PathBuf,
    pub log_dir: PathBuf,
    /// `*` allows any origin
    pub cors_allowed_origins: Vec<String>,
    /// Reject empty titles server-side
    pub strict_titles: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            database_path: PathBuf::from("tasks.db"),
            log_dir: PathBuf::from("logs"),
            cors_allowed_origins: vec!["*".to_string()],
            strict_titles: false,
        }
    }
}

impl Config {
    /// Load configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let get = |name: &str| {
            lookup(name).and_then(|v| {
                let trimmed = v.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            })
        };

        if let Some(host) = get("TASKS_HOST") {
            config.host = host;
        }
        if let Some(port) = get("TASKS_PORT") {
            config.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                name: "TASKS_PORT",
                expected: "u16",
                value: port.clone(),
            })?;
        }
        if let Some(path) = get("TASKS_DATABASE_PATH") {
            config.database_path = PathBuf::from(path);
        }
        if let Some(dir) = get("TASKS_LOG_DIR") {
            config.log_dir = PathBuf::from(dir);
        }
        if let Some(origins) = get("TASKS_CORS_ALLOWED_ORIGINS") {
            config.cors_allowed_origins = parse_origins(&origins);
        }
        if let Some(strict) = get("TASKS_STRICT_TITLES") {
            config.strict_titles = parse_bool("TASKS_STRICT_TITLES", &strict)?;
        }

        Ok(config)
    }

    /// `host:port` string for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            name,
            expected: "boolean (true/false/1/0)",
            value: value.to_string(),
        }),
    }
}

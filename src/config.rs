//! Server configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CONTENT_DIR: &str = "content";
pub const DEFAULT_STATIC_DIR: &str = "public";
pub const DEFAULT_WORKER_API_URL: &str = "http://localhost:8787";
pub const DEFAULT_WORKER_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_WORKER_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

/// Connection settings for the external worker API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerConfig {
    pub base_url: String,
    pub timeouts: WorkerTimeouts,
}

impl WorkerConfig {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeouts: WorkerTimeouts {
                request_secs: DEFAULT_WORKER_REQUEST_TIMEOUT_SECS,
                connect_secs: DEFAULT_WORKER_CONNECT_TIMEOUT_SECS,
            },
        }
    }

    /// Local workers accept the development bypass header instead of real auth.
    #[must_use]
    pub fn dev_bypass(&self) -> bool {
        self.base_url.contains("localhost")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub content_dir: PathBuf,
    pub static_dir: PathBuf,
    pub worker: WorkerConfig,
    pub cookie_secure: bool,
}

impl Config {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `CONTENT_DIR`: default `content`
    /// - `STATIC_DIR`: default `public`
    /// - `WORKER_API_URL`: default `http://localhost:8787`
    /// - `WORKER_REQUEST_TIMEOUT_SECS`: default 30
    /// - `WORKER_CONNECT_TIMEOUT_SECS`: default 5
    /// - `COOKIE_SECURE`: default false
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] when `PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let content_dir = env_path("CONTENT_DIR", DEFAULT_CONTENT_DIR);
        let static_dir = env_path("STATIC_DIR", DEFAULT_STATIC_DIR);

        let base_url = std::env::var("WORKER_API_URL").unwrap_or_else(|_| DEFAULT_WORKER_API_URL.to_string());
        let mut worker = WorkerConfig::new(&base_url);
        worker.timeouts = WorkerTimeouts {
            request_secs: env_parse_u64("WORKER_REQUEST_TIMEOUT_SECS", DEFAULT_WORKER_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("WORKER_CONNECT_TIMEOUT_SECS", DEFAULT_WORKER_CONNECT_TIMEOUT_SECS),
        };

        let cookie_secure = env_bool("COOKIE_SECURE").unwrap_or(false);

        Ok(Self { port, content_dir, static_dir, worker, cookie_secure })
    }
}

fn env_path(key: &str, default: &str) -> PathBuf {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map_or_else(|| PathBuf::from(default), PathBuf::from)
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

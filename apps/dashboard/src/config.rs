use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every setting has a default, so a bare environment boots with sample data.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON snapshot of the resume collection. Built-in samples when unset.
    pub resumes_path: Option<PathBuf>,
    pub session_cookie: String,
    pub session_ttl_secs: u64,
    pub auth_route: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            resumes_path: None,
            session_cookie: "session".to_string(),
            session_ttl_secs: 3600,
            auth_route: "/auth".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        let auth_route = optional_env("AUTH_ROUTE").unwrap_or(defaults.auth_route);
        if !auth_route.starts_with('/') {
            anyhow::bail!("AUTH_ROUTE must be an absolute path, got '{auth_route}'");
        }

        Ok(Config {
            port: parse_env("PORT", defaults.port)
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG").unwrap_or(defaults.rust_log),
            resumes_path: optional_env("RESUMES_PATH").map(PathBuf::from),
            session_cookie: optional_env("SESSION_COOKIE").unwrap_or(defaults.session_cookie),
            session_ttl_secs: parse_env("SESSION_TTL_SECS", defaults.session_ttl_secs)
                .context("SESSION_TTL_SECS must be a whole number of seconds")?,
            auth_route,
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'")),
        None => Ok(default),
    }
}

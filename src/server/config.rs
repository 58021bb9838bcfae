use crate::server::error::{config::ConfigError, AppError};

/// Application configuration read from the environment (and `.env` via dotenvy).
pub struct Config {
    /// SQLite connection string, e.g. `sqlite://containerwatch.db?mode=rwc`.
    pub database_url: String,
    /// Public base URL, used for setup links and container form links.
    pub app_url: String,
    /// Marks the session cookie `Secure`. Defaults to false for local HTTP development.
    pub session_secure_cookie: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            app_url: required_var("APP_URL")?
                .trim_end_matches('/')
                .to_string(),
            session_secure_cookie: optional_bool_var("SESSION_SECURE_COOKIE")?.unwrap_or(false),
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional_bool_var(name: &str) -> Result<Option<bool>, ConfigError> {
    let Ok(value) = std::env::var(name) else {
        return Ok(None);
    };

    parse_bool(&value)
        .map(Some)
        .ok_or_else(|| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: format!("expected true or false, got '{}'", value),
        })
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

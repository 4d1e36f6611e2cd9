use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_SESSION_DAYS: i64 = 7;

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    /// Origin allowed to make credentialed cross-origin requests, e.g. the admin frontend.
    pub allowed_origin: Option<String>,
    /// Days of inactivity before a session expires.
    pub session_days: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            allowed_origin: std::env::var("ALLOWED_ORIGIN")
                .ok()
                .filter(|origin| !origin.trim().is_empty()),
            session_days: parse_session_days(std::env::var("SESSION_DAYS").ok().as_deref())?,
        })
    }
}

fn parse_session_days(raw: Option<&str>) -> Result<i64, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_SESSION_DAYS);
    };

    match raw.trim().parse::<i64>() {
        Ok(days) if days > 0 => Ok(days),
        _ => Err(ConfigError::InvalidEnvVar {
            name: "SESSION_DAYS".to_string(),
            reason: format!("expected a positive number of days, got '{}'", raw),
        }),
    }
}

use crate::server::error::config::ConfigError;

/// Buffered change events per SSE subscriber when `EVENT_BUFFER` is unset.
pub const DEFAULT_EVENT_BUFFER: usize = 256;

pub struct Config {
    pub database_url: String,
    /// Capacity of the change-event broadcast channel. A subscriber that
    /// lags past this misses events instead of blocking mutations.
    pub event_buffer: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let event_buffer = match std::env::var("EVENT_BUFFER") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidEnvValue {
                var: "EVENT_BUFFER".to_string(),
                reason: format!("expected a positive integer, got {raw:?}"),
            })?,
            Err(_) => DEFAULT_EVENT_BUFFER,
        };

        Ok(Self {
            database_url: require("DATABASE_URL")?,
            event_buffer,
        })
    }
}

fn require(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

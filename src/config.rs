use crate::error::{config::ConfigError, AppError};

const DEFAULT_EVENT_RETENTION_DAYS: i64 = 90;
const DEFAULT_ARCHIVE_PURGE_CRON: &str = "0 0 3 * * *";

pub struct Config {
    pub database_url: String,

    /// Endpoint that receives every published event, if set.
    pub event_webhook_url: Option<String>,

    /// Archived events older than this many days are purged.
    pub event_retention_days: i64,
    /// Cron expression (with seconds) for the archive purge job.
    pub archive_purge_cron: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            event_webhook_url: optional("EVENT_WEBHOOK_URL"),
            event_retention_days: retention_days(optional("EVENT_RETENTION_DAYS"))?,
            archive_purge_cron: optional("ARCHIVE_PURGE_CRON")
                .unwrap_or_else(|| DEFAULT_ARCHIVE_PURGE_CRON.to_string()),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Unset and blank variables are both treated as absent.
fn optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

fn retention_days(value: Option<String>) -> Result<i64, ConfigError> {
    let Some(value) = value else {
        return Ok(DEFAULT_EVENT_RETENTION_DAYS);
    };

    match value.trim().parse::<i64>() {
        Ok(days) if days > 0 => Ok(days),
        Ok(_) => Err(ConfigError::InvalidEnvVar {
            name: "EVENT_RETENTION_DAYS".to_string(),
            value,
            reason: "must be a positive number of days".to_string(),
        }),
        Err(e) => Err(ConfigError::InvalidEnvVar {
            name: "EVENT_RETENTION_DAYS".to_string(),
            value,
            reason: e.to_string(),
        }),
    }
}

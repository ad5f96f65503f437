use crate::foundation::EngineError;
use chrono::{Local, TimeZone};
use std::time::{SystemTime, UNIX_EPOCH};

/// Default validity window applied to uploaded and generated key material.
pub const ONE_YEAR_SECS: i64 = 365 * 24 * 60 * 60;

/// Environment variable that pins the clock for deterministic tests.
pub const TEST_NOW_SECS_ENV_VAR: &str = "B2C_KEYSET_TEST_NOW_SECS";

pub fn current_epoch_secs_env(env_var: Option<&str>) -> Result<i64, EngineError> {
    if let Some(var) = env_var {
        if let Ok(value) = std::env::var(var) {
            return value.parse::<i64>().map_err(|err| EngineError::SerializationError { details: err.to_string() });
        }
    }
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|err| EngineError::SerializationError { details: err.to_string() })?;
    Ok(now.as_secs() as i64)
}

/// Returns the current wall-clock timestamp in epoch seconds.
///
/// For test determinism, this respects `TEST_NOW_SECS_ENV_VAR` when set.
pub fn now_epoch_secs() -> i64 {
    current_epoch_secs_env(Some(TEST_NOW_SECS_ENV_VAR)).or_else(|_| current_epoch_secs_env(None)).unwrap_or(0)
}

/// Renders epoch seconds as a fixed local-time string (`YYYY-MM-DD HH:MM:SS`).
///
/// Out-of-range values render as `"n/a"`, matching the projection for
/// absent timestamps.
pub fn format_local_timestamp(epoch_secs: i64) -> String {
    match Local.timestamp_opt(epoch_secs, 0).single() {
        Some(ts) => ts.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => "n/a".to_string(),
    }
}

use std::time::Duration;

use humantime::parse_duration;

use crate::error::ConfigError;

/// Value of `key`, `None` when unset or blank.
pub(super) fn env_string(key: &'static str) -> std::result::Result<Option<String>, ConfigError> {
    match std::env::var(key) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(ConfigError::InvalidField {
            field: key,
            message: err.to_string(),
        }),
    }
}

pub(super) fn env_bool(key: &'static str) -> std::result::Result<Option<bool>, ConfigError> {
    env_string(key)?
        .map(|value| parse_bool(key, &value))
        .transpose()
}

/// Humantime (`"30s"`) or plain seconds (`"30"`).
pub(super) fn env_duration(
    key: &'static str,
) -> std::result::Result<Option<Duration>, ConfigError> {
    env_string(key)?
        .map(|value| parse_seconds_or_humantime(key, value.trim()))
        .transpose()
}

fn parse_bool(key: &'static str, value: &str) -> std::result::Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidField {
            field: key,
            message: format!("expected a boolean, got {other:?}"),
        }),
    }
}

fn parse_seconds_or_humantime(
    key: &'static str,
    value: &str,
) -> std::result::Result<Duration, ConfigError> {
    if let Ok(seconds) = value.parse::<u64>() {
        return Ok(Duration::from_secs(seconds));
    }
    parse_duration(value).map_err(|err| ConfigError::InvalidField {
        field: key,
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::{parse_bool, parse_seconds_or_humantime};
    use std::time::Duration;

    #[test]
    fn booleans_accept_common_spellings() {
        assert!(matches!(parse_bool("ZBX_INSECURE_TLS", "Yes"), Ok(true)));
        assert!(matches!(parse_bool("ZBX_INSECURE_TLS", "0"), Ok(false)));
        assert!(parse_bool("ZBX_INSECURE_TLS", "maybe").is_err());
    }

    #[test]
    fn durations_accept_plain_seconds() {
        assert_eq!(
            parse_seconds_or_humantime("ZBX_TIMEOUT", "30").ok(),
            Some(Duration::from_secs(30))
        );
        assert_eq!(
            parse_seconds_or_humantime("ZBX_TIMEOUT", "1m 30s").ok(),
            Some(Duration::from_secs(90))
        );
        assert!(parse_seconds_or_humantime("ZBX_TIMEOUT", "soon").is_err());
    }
}

use std::env;
use std::fmt;
use std::path::PathBuf;
use tiercheck_core::Decimal;

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Settings read from the environment (and a `.env` file, if present).
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Tracing filter used when `RUST_LOG` is not set.
    pub log_level: String,
    /// Minimum total for a `Pass` status.
    pub min_points: Decimal,
    /// Custom table file used instead of the built-in tables.
    pub tables_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_source(|key| env::var(key).ok())
    }

    fn from_source<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = lookup("TIERCHECK_LOG_LEVEL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        let min_points = match lookup("TIERCHECK_MIN_POINTS") {
            Some(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse::<Decimal>()
                .ok()
                .filter(|v| !v.is_sign_negative())
                .ok_or_else(|| ConfigError::InvalidMinPoints { value: raw.clone() })?,
            _ => Decimal::ZERO,
        };

        let tables_path = lookup("TIERCHECK_TABLES")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            log_level,
            min_points,
            tables_path,
        })
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidMinPoints { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidMinPoints { value } => write!(
                f,
                "TIERCHECK_MIN_POINTS must be a non-negative number, got '{}'",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn source(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = AppConfig::from_source(source(&[])).unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.min_points, Decimal::ZERO);
        assert!(config.tables_path.is_none());
    }

    #[test]
    fn reads_all_settings() {
        let config = AppConfig::from_source(source(&[
            ("TIERCHECK_LOG_LEVEL", "debug"),
            ("TIERCHECK_MIN_POINTS", "10.5"),
            ("TIERCHECK_TABLES", "/etc/tiercheck/pilot.json"),
        ]))
        .unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.min_points, "10.5".parse::<Decimal>().unwrap());
        assert_eq!(
            config.tables_path,
            Some(PathBuf::from("/etc/tiercheck/pilot.json"))
        );
    }

    #[test]
    fn rejects_invalid_min_points() {
        let err = AppConfig::from_source(source(&[("TIERCHECK_MIN_POINTS", "lots")])).unwrap_err();
        assert!(err.to_string().contains("lots"));
        assert!(AppConfig::from_source(source(&[("TIERCHECK_MIN_POINTS", "-1")])).is_err());
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = AppConfig::from_source(source(&[
            ("TIERCHECK_LOG_LEVEL", " "),
            ("TIERCHECK_MIN_POINTS", ""),
            ("TIERCHECK_TABLES", ""),
        ]))
        .unwrap();
        assert_eq!(config.log_level, "warn");
        assert!(config.tables_path.is_none());
    }
}

use crate::{ConfigError, ConfigErrorResult};

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use log::LevelFilter;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// A verbosity threshold as written in `config.toml` and `LB_LOG_*` variables.
///
/// Names are case-insensitive (`off`, `error`, `warn`, `info`, `debug`,
/// `trace`). Anything else is a configuration error rather than a silent
/// fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLevel(pub LevelFilter);

impl LogLevel {
    pub fn filter(self) -> LevelFilter {
        self.0
    }

    /// Parse a `target=level` list such as `lb_db=debug,sqlx=warn`.
    /// Later entries for the same target win.
    pub fn parse_targets(list: &str) -> ConfigErrorResult<BTreeMap<String, LogLevel>> {
        let mut targets = BTreeMap::new();

        for entry in list.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let Some((target, level)) = entry.split_once('=') else {
                return Err(ConfigError::logging(format!(
                    "expected target=level, got '{}'",
                    entry
                )));
            };

            let target = target.trim();
            if target.is_empty() {
                return Err(ConfigError::logging(format!(
                    "missing target name in '{}'",
                    entry
                )));
            }

            targets.insert(target.to_string(), level.parse()?);
        }

        Ok(targets)
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match LevelFilter::from_str(s.trim()) {
            Ok(filter) => Ok(LogLevel(filter)),
            Err(_) => Err(ConfigError::logging(format!("unknown log level '{}'", s.trim()))),
        }
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(D::Error::custom)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.as_str().to_ascii_lowercase())
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(log_level: LogLevel) -> Self {
        log_level.0
    }
}

use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_LOG_COLORED, DEFAULT_LOG_DIRECTORY, DEFAULT_LOG_LEVEL,
    LogLevel,
};

use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Per-target overrides, e.g. `lb_db = "debug"` under `[logging.targets]`
    pub targets: BTreeMap<String, LogLevel>,
    pub colored: bool,
    /// Log file name inside `dir`; stdout when unset
    pub file: Option<String>,
    pub dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(DEFAULT_LOG_LEVEL),
            targets: BTreeMap::new(),
            colored: DEFAULT_LOG_COLORED,
            file: None,
            dir: String::from(DEFAULT_LOG_DIRECTORY),
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.targets.keys().any(|target| target.trim().is_empty()) {
            return Err(ConfigError::logging("logging.targets has an empty target name"));
        }

        if self.file.is_some() && self.dir.trim().is_empty() {
            return Err(ConfigError::logging("logging.dir cannot be empty when logging.file is set"));
        }

        Ok(())
    }
}

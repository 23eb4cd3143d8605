use crate::error::{Result as ServerErrorResult, ServerError};

use lb_config::LoggingConfig;

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{LevelFilter, Record, info};

/// Targets held below the root level unless `logging.targets` says otherwise.
/// sqlx logs every statement at info.
const QUIET_TARGETS: &[(&str, LevelFilter)] = &[("sqlx", LevelFilter::Warn)];

/// Where formatted lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    File(PathBuf),
    ColoredStdout,
    PlainStdout,
}

impl Sink {
    /// A file wins over stdout; color only applies to stdout.
    pub fn select(config: &LoggingConfig, log_file: Option<PathBuf>) -> Self {
        match log_file {
            Some(path) => Sink::File(path),
            None if config.colored => Sink::ColoredStdout,
            None => Sink::PlainStdout,
        }
    }
}

impl fmt::Display for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sink::File(path) => write!(f, "file {}", path.display()),
            Sink::ColoredStdout => f.write_str("stdout (colored)"),
            Sink::PlainStdout => f.write_str("stdout"),
        }
    }
}

/// Per-target levels: the quiet defaults, overridden by configured targets.
pub fn target_levels(config: &LoggingConfig) -> BTreeMap<String, LevelFilter> {
    let mut levels: BTreeMap<String, LevelFilter> = QUIET_TARGETS
        .iter()
        .map(|(target, level)| (target.to_string(), *level))
        .collect();

    levels.extend(
        config
            .targets
            .iter()
            .map(|(target, level)| (target.clone(), level.filter())),
    );

    levels
}

/// Install the global logger.
///
/// `log_file` is the resolved path from `Config::log_file_path`; its parent
/// directory must already exist.
pub fn initialize(config: &LoggingConfig, log_file: Option<PathBuf>) -> ServerErrorResult<()> {
    let levels = target_levels(config);
    let sink = Sink::select(config, log_file);

    let mut dispatch = Dispatch::new().level(config.level.filter());
    for (target, level) in &levels {
        dispatch = dispatch.level_for(target.clone(), *level);
    }

    let dispatch = match &sink {
        Sink::File(path) => {
            let file = fern::log_file(path).map_err(|e| ServerError::Logger {
                message: format!("Failed to open log file {}: {}", path.display(), e),
            })?;
            dispatch
                .format(|out, message, record| write_line(out, message, record, record.level()))
                .chain(file)
        }
        Sink::ColoredStdout => {
            let colors = ColoredLevelConfig::new()
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);
            dispatch
                .format(move |out, message, record| {
                    write_line(out, message, record, colors.color(record.level()))
                })
                .chain(std::io::stdout())
        }
        Sink::PlainStdout => dispatch
            .format(|out, message, record| write_line(out, message, record, record.level()))
            .chain(std::io::stdout()),
    };

    dispatch.apply().map_err(|e| ServerError::Logger {
        message: format!("Failed to initialize logger: {e}"),
    })?;

    info!(
        "Logger initialized: level={}, targets=[{}], output={}",
        config.level,
        describe_levels(&levels),
        sink
    );

    // Dependencies that emit tracing events end up here too
    tracing_log::LogTracer::init().ok();

    Ok(())
}

/// `a=warn, b=debug`, in target order.
pub fn describe_levels(levels: &BTreeMap<String, LevelFilter>) -> String {
    levels
        .iter()
        .map(|(target, level)| format!("{}={}", target, level.as_str().to_ascii_lowercase()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn write_line(
    out: FormatCallback,
    message: &fmt::Arguments,
    record: &Record,
    level: impl fmt::Display,
) {
    out.finish(format_args!(
        "[{} {} {}] {}",
        humantime::format_rfc3339_millis(SystemTime::now()),
        level,
        record.target(),
        message
    ))
}

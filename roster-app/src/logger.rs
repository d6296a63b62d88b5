use crate::error::{AppError, Result as AppErrorResult};

use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;

/// Initialize logger with fern
///
/// # Arguments
/// * `log_level` - Log level filter
/// * `log_file` - Optional path to log file. None = stdout
/// * `colored` - Enable colored output (ignored when logging to file)
pub fn initialize(
    log_level: roster_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> AppErrorResult<()> {
    let base_dispatch = Dispatch::new().level(log_level.0);

    let dispatch = if let Some(ref log_path) = log_file {
        // File output (no colors, plain format)
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)
            .map_err(|e| AppError::Logger {
                message: format!("Failed to open log file {}: {}", log_path.display(), e),
            })?;

        Dispatch::new().format(plain_format).chain(file)
    } else if colored {
        let colors = ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red);

        Dispatch::new()
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "[{date} - {level}] {message}",
                    date = humantime::format_rfc3339(SystemTime::now()),
                    level = colors.color(record.level()),
                    message = message,
                ))
            })
            .chain(std::io::stdout())
    } else {
        Dispatch::new().format(plain_format).chain(std::io::stdout())
    };

    base_dispatch
        .chain(dispatch)
        .apply()
        .map_err(|e| AppError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match log_file {
        Some(ref path) => info!(
            "Logger initialized: level={:?}, file={}",
            log_level.0,
            path.display()
        ),
        None => info!("Logger initialized: level={:?}, stdout", log_level.0),
    }

    Ok(())
}

fn plain_format(
    out: fern::FormatCallback<'_>,
    message: &std::fmt::Arguments<'_>,
    record: &log::Record<'_>,
) {
    out.finish(format_args!(
        "[{date} - {level}] {message}",
        date = humantime::format_rfc3339(SystemTime::now()),
        level = record.level(),
        message = message,
    ))
}

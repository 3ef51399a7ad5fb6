//! Logging setup
//!
//! One global `tracing` subscriber built from the `[logging]` section.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{self, Rotation};

use crate::config::{LogFormat, LoggingConfig, StaticConfig};

const FALLBACK_LOG_PREFIX: &str = "country-density";

type BoxedWriter = Box<dyn Write + Send + Sync>;

/// stdout, a plain append-only file, or a daily rolling file
fn open_writer(logging: &LoggingConfig) -> Result<(BoxedWriter, bool)> {
    let Some(file) = logging.file.as_deref().filter(|f| !f.is_empty()) else {
        return Ok((Box::new(std::io::stdout()), true));
    };

    if !logging.enable_rotation {
        let handle = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(file)
            .with_context(|| format!("Failed to open log file {}", file))?;
        return Ok((Box::new(handle), false));
    }

    let path = Path::new(file);
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let prefix = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(FALLBACK_LOG_PREFIX);

    let appender = rolling::Builder::new()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .filename_suffix("log")
        .max_log_files(logging.max_backups.max(1) as usize)
        .build(dir)
        .with_context(|| format!("Failed to set up rolling log in {}", dir.display()))?;
    Ok((Box::new(appender), false))
}

/// Install the global subscriber.
///
/// Keep the returned guard alive until exit, otherwise buffered lines are
/// lost. Fails if a subscriber is already installed.
pub fn init_logging(config: &StaticConfig) -> Result<WorkerGuard> {
    let logging = &config.logging;
    let (writer, to_terminal) = open_writer(logging)?;
    let (writer, guard) = tracing_appender::non_blocking(writer);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&logging.level))
        .with_writer(writer)
        .with_target(true)
        .with_ansi(to_terminal);

    match logging.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    }
    .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;

    Ok(guard)
}

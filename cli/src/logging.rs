use anyhow::{Context, Result};
use std::path::Path;
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    fmt::{self, time::OffsetTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Initialize logging to stderr, plus daily rotated files when `log_dir` is set.
///
/// Stdout is left for command output. Keep the returned guard alive until
/// exit so buffered file logs are flushed.
pub fn init_logging(verbose: bool, log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    // Set up time formatting with local time
    let timer = OffsetTime::local_rfc_3339().unwrap_or_else(|_| {
        // Fallback to UTC if local time fails (can happen in some environments)
        OffsetTime::new(
            time::UtcOffset::UTC,
            time::format_description::well_known::Rfc3339,
        )
    });

    let (file_layer, guard) = match log_dir {
        Some(logs_dir) => {
            std::fs::create_dir_all(logs_dir)
                .with_context(|| format!("Failed to create log directory {:?}", logs_dir))?;

            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("fyora-authorizer")
                .filename_suffix("log")
                .build(logs_dir)
                .context("Failed to create rolling log file")?;

            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            // File layer with full details
            let layer = fmt::layer()
                .with_writer(non_blocking)
                .with_timer(timer.clone())
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true);

            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(file_layer)
        // Console layer on stderr
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_timer(timer)
                .with_target(false),
        )
        .with(filter)
        .init();

    if let Some(logs_dir) = log_dir {
        tracing::debug!("Log files are being written to: {:?}", logs_dir);
    }

    Ok(guard)
}

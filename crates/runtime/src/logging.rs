//! Tracing subscriber setup.
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LoggingConfig;
use crate::error::{Result, RuntimeError};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over [`LoggingConfig::filter`]. Events go to
/// stderr and, when a directory is configured, to a non-blocking log file.
/// The returned guard must be kept alive for as long as file output is
/// wanted; dropping it flushes and closes the writer.
pub fn init_tracing(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let directive = std::env::var(EnvFilter::DEFAULT_ENV)
        .ok()
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| config.filter.clone());
    let filter = EnvFilter::try_new(directive).map_err(RuntimeError::LogFilter)?;

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(config.ansi);

    let Some(directory) = &config.directory else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .try_init()
            .map_err(RuntimeError::Subscriber)?;
        return Ok(None);
    };

    std::fs::create_dir_all(directory).map_err(|source| RuntimeError::LogDirectory {
        path: directory.clone(),
        source,
    })?;
    let file_appender = tracing_appender::rolling::never(directory, &config.file_name);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(RuntimeError::Subscriber)?;

    tracing::info!(
        target: "runtime::logging",
        file = %directory.join(&config.file_name).display(),
        "file logging enabled"
    );
    Ok(Some(guard))
}

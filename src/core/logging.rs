//! Log sinks for the service.
//!
//! Every event the filter admits is written as a JSON line to `combined.log`;
//! error events are also written to `error.log`. Outside production the same
//! events are echoed to stdout in a compact format.

use tracing::Subscriber;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

use crate::config::AppConfig;
use crate::core::error::AppError;

pub const ERROR_LOG_FILE: &str = "error.log";
pub const COMBINED_LOG_FILE: &str = "combined.log";

/// Keeps the background file writers alive; dropping it flushes pending lines.
pub struct LogGuards {
    _error: WorkerGuard,
    _combined: WorkerGuard,
}

pub fn init_logging(config: &AppConfig) -> Result<LogGuards, AppError> {
    let (subscriber, guards) = build_subscriber(config, std::io::stdout)?;
    subscriber
        .try_init()
        .map_err(|err| AppError::internal(format!("failed to install logger: {err}")))?;

    Ok(guards)
}

/// Builds the subscriber without installing it; `console` receives the echo
/// outside production.
pub fn build_subscriber<W>(
    config: &AppConfig,
    console: W,
) -> Result<(impl Subscriber + Send + Sync + use<W>, LogGuards), AppError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    std::fs::create_dir_all(&config.log_dir).map_err(|err| {
        AppError::configuration(format!(
            "failed to create log directory {}: {err}",
            config.log_dir.display()
        ))
    })?;

    let (error_writer, error_guard) = file_writer(config, ERROR_LOG_FILE)?;
    let (combined_writer, combined_guard) = file_writer(config, COMBINED_LOG_FILE)?;

    let error_layer = fmt::layer()
        .json()
        .with_writer(error_writer)
        .with_filter(LevelFilter::ERROR);
    let combined_layer = fmt::layer().json().with_writer(combined_writer);
    let console_layer = (!config.environment.is_production())
        .then(|| fmt::layer().compact().with_target(false).with_writer(console));

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(error_layer)
        .with(combined_layer)
        .with(console_layer);

    Ok((
        subscriber,
        LogGuards {
            _error: error_guard,
            _combined: combined_guard,
        },
    ))
}

fn file_writer(
    config: &AppConfig,
    file_name: &str,
) -> Result<(NonBlocking, WorkerGuard), AppError> {
    let (prefix, suffix) = file_name.split_once('.').unwrap_or((file_name, ""));
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(prefix)
        .filename_suffix(suffix)
        .build(&config.log_dir)
        .map_err(|err| AppError::configuration(format!("failed to open {file_name}: {err}")))?;

    Ok(tracing_appender::non_blocking(appender))
}

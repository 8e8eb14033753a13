use std::path::Path;

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing_appender::non_blocking::WorkerGuard;
pub use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{
    filter::ParseError, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

// keeps the non-blocking file writer flushing for the lifetime of the process
static FILE_GUARD: OnceCell<WorkerGuard> = OnceCell::new();

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct Config {
    /// Logging level in the env logger format.
    pub level: String,
    pub service_name: String,
    pub exporter: Exporter,
    /// The path to the file to write logs to.
    pub file_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: default_level(),
            service_name: default_service_name(),
            exporter: Exporter::default(),
            file_path: default_file_path(),
        }
    }
}

#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub enum Exporter {
    #[default]
    Stdout,
    File,
    FileAndStdout,
}

fn default_service_name() -> String {
    "esports_matches_web".to_string()
}

fn default_file_path() -> String {
    "logs/server.log".to_string()
}

fn default_level() -> String {
    "info".to_string()
}

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("Invalid log directive: {0}")]
    InvalidLogDirective(#[from] ParseError),
    #[error("Subscriber error: {0}")]
    Subscriber(#[from] TryInitError),
    #[error("File IO error: {0}")]
    FileIO(#[from] std::io::Error),
}

/// Installs the global tracing subscriber, bridges `log` records into it and
/// routes panics through it.
///
/// # Errors
/// If the level is not a valid filter, the log directory cannot be created,
/// or a global subscriber is already set.
pub fn init_telemetry(config: &Config) -> Result<(), TelemetryError> {
    match config.exporter {
        Exporter::Stdout => init_stdout(config)?,
        Exporter::File => init_file(config, false)?,
        Exporter::FileAndStdout => init_file(config, true)?,
    }
    log_panics::init();
    tracing::info!(
        service = %config.service_name,
        exporter = ?config.exporter,
        "telemetry initialized"
    );

    Ok(())
}

fn init_stdout(config: &Config) -> Result<(), TelemetryError> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_filter(env_filter(config)?);

    tracing_subscriber::registry().with(fmt_layer).try_init()?;
    Ok(())
}

fn init_file(config: &Config, with_stdout: bool) -> Result<(), TelemetryError> {
    let file_path = Path::new(&config.file_path);
    let dir = file_path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)?;

    let file_appender = tracing_appender::rolling::daily(
        dir,
        file_path
            .file_name()
            .unwrap_or_else(|| std::ffi::OsStr::new("server.log")),
    );
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
    let _ = FILE_GUARD.set(guard);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_filter(env_filter(config)?);

    let stdout_layer = with_stdout
        .then(|| {
            env_filter(config).map(|filter| {
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_filter(filter)
            })
        })
        .transpose()?;

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stdout_layer)
        .try_init()?;
    Ok(())
}

fn env_filter(config: &Config) -> Result<EnvFilter, TelemetryError> {
    // try_new so invalid directives surface instead of being skipped
    let filter = EnvFilter::try_new(&config.level)?
        .add_directive("hyper=off".parse()?)
        .add_directive("h2=off".parse()?)
        .add_directive("reqwest=off".parse()?);
    Ok(filter)
}

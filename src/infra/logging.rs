use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing_appender::rolling::{Builder, Rotation};
use tracing_subscriber::EnvFilter;

use crate::infra::{config::LogConfig, error::AppError};

const APP_DIR_NAME: &str = "openchat";
const LOG_FILE_NAME: &str = "openchat.log";

/// Installs the global subscriber.
///
/// The TUI owns the terminal, so records go to a file. Without a configured
/// path and without a cache directory the subscriber falls back to stderr.
pub fn init(config: &LogConfig) -> Result<(), AppError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    match resolve_log_path(config.file.as_deref(), dirs::cache_dir()) {
        Some(path) => {
            let appender = open_appender(&path)?;
            builder
                .with_ansi(false)
                .with_writer(appender)
                .try_init()
                .map_err(AppError::LoggingInit)
        }
        None => builder
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(AppError::LoggingInit),
    }
}

fn resolve_log_path(configured: Option<&Path>, cache_dir: Option<PathBuf>) -> Option<PathBuf> {
    configured
        .map(Path::to_path_buf)
        .or_else(|| cache_dir.map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME)))
}

fn open_appender(path: &Path) -> Result<tracing_appender::rolling::RollingFileAppender, AppError> {
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| LOG_FILE_NAME.to_owned());

    fs::create_dir_all(dir).map_err(|source| AppError::LogDirCreate {
        path: dir.to_path_buf(),
        source,
    })?;

    Builder::new()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
        .map_err(|source| AppError::LogFileOpen {
            path: path.to_path_buf(),
            source,
        })
}

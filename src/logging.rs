use anyhow::Result;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use tracing_appender::non_blocking;
use tracing_subscriber::EnvFilter;

use crate::data_paths::DataPaths;

/// Logging configuration for one interactive session.
///
/// The TUI owns the terminal, so logging is file-only; each session gets its
/// own log file.
pub struct LoggingConfig {
    pub data_paths: DataPaths,
    pub session_id: String,
    pub verbose: u8,
}

impl LoggingConfig {
    pub fn new(data_paths: DataPaths, verbose: u8) -> Self {
        let session_id = generate_session_id();
        Self {
            data_paths,
            session_id,
            verbose,
        }
    }

    pub fn log_file_path(&self) -> PathBuf {
        self.data_paths
            .logs()
            .join(format!("polysim-{}.log", self.session_id))
    }

    fn env_filter(&self) -> EnvFilter {
        let default = match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
    }
}

/// Initialize file-only logging for a TUI session.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    config.data_paths.ensure_directories()?;

    let log_file = std::fs::File::create(config.log_file_path())
        .map_err(|e| anyhow::anyhow!("Failed to create log file: {}", e))?;

    let (file_writer, file_guard) = non_blocking(log_file);

    // Keep the guard alive for the process lifetime so buffered lines flush
    std::mem::forget(file_guard);

    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .init();

    tracing::info!(
        session_id = %config.session_id,
        log_file = %config.log_file_path().display(),
        "Logging initialized"
    );

    Ok(())
}

/// Generate a unique session ID with timestamp
fn generate_session_id() -> String {
    let now: DateTime<Utc> = Utc::now();
    format!("{}", now.format("%Y%m%d_%H%M%S_%3f"))
}

/// Log session end
pub fn log_session_end() {
    tracing::info!("Session ended");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_format() {
        let session_id = generate_session_id();
        // Should be in format: YYYYMMDD_HHMMSS_mmm
        assert_eq!(session_id.len(), 19);
        assert!(session_id.contains('_'));
    }

    #[test]
    fn test_logging_config() {
        let data_paths = DataPaths::new("/tmp/test");

        let config = LoggingConfig::new(data_paths.clone(), 0);

        assert!(config.log_file_path().starts_with(data_paths.logs()));
        assert!(config
            .log_file_path()
            .to_string_lossy()
            .contains("polysim-"));
    }
}

//! Logging initialization for the company registry MCP server.
//!
//! Three modes:
//! - Cli: logs to STDOUT.
//! - Server: logs to STDERR and to a rolling file in the given directory.
//! - ServerJson: JSON lines to a rolling file only.
//!
//! Server logs are rolled over when they reach 5 MB. Rotated logs are
//! compressed. At most 20 rotated logs are kept.

use std::path::{Path, PathBuf};

use anyhow::Result;
use file_rotate::{ContentLimit, FileRotate, compression::Compression, suffix::AppendCount};
use tracing_appender::non_blocking::{NonBlockingBuilder, WorkerGuard};
use tracing_subscriber::{EnvFilter, fmt::writer::MakeWriterExt};

const LOG_FILE_NAME: &str = "company-registry-mcp.log";
const MAX_LOG_FILES: usize = 20;
const MAX_LOG_FILE_BYTES: usize = 5 * 1024 * 1024;

pub enum LogMode {
    Cli,
    Server { log_dir: PathBuf },
    ServerJson { log_dir: PathBuf },
}

/// Guard that keeps background logging workers alive.
pub struct LoggingGuards {
    _guards: Vec<WorkerGuard>,
}

pub fn init(mode: LogMode, verbose: bool) -> Result<Option<LoggingGuards>> {
    let filter = env_filter(verbose);

    match mode {
        LogMode::Cli => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .init();
            Ok(None)
        }
        LogMode::Server { log_dir } => {
            let writer = rotating_writer(&log_dir)?;

            let (file_non_blocking, file_guard) = tracing_appender::non_blocking(writer);
            // Whoever launched the server may never drain stderr. Bound the
            // buffer and drop lines past the limit.
            let (stderr_non_blocking, stderr_guard) = NonBlockingBuilder::default()
                .lossy(true)
                .buffered_lines_limit(10_000)
                .finish(std::io::stderr());

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(
                    file_non_blocking
                        .with_max_level(tracing::Level::INFO)
                        .and(stderr_non_blocking),
                )
                .with_ansi(false)
                .init();

            Ok(Some(LoggingGuards {
                _guards: vec![file_guard, stderr_guard],
            }))
        }
        LogMode::ServerJson { log_dir } => {
            let writer = rotating_writer(&log_dir)?;
            let (non_blocking, guard) = tracing_appender::non_blocking(writer);

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(non_blocking)
                .with_ansi(false)
                .json()
                .init();

            Ok(Some(LoggingGuards {
                _guards: vec![guard],
            }))
        }
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

pub fn log_file_path(log_dir: &Path) -> PathBuf {
    log_dir.join(LOG_FILE_NAME)
}

fn rotating_writer(log_dir: &Path) -> Result<FileRotate<AppendCount>> {
    std::fs::create_dir_all(log_dir)?;

    Ok(FileRotate::new(
        log_file_path(log_dir),
        AppendCount::new(MAX_LOG_FILES),
        ContentLimit::Bytes(MAX_LOG_FILE_BYTES),
        Compression::OnRotate(1),
        None,
    ))
}

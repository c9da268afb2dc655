//! Tracing setup
//!
//! The full-screen mode owns the terminal, so it only ever logs to a file.
//! The line-oriented modes log compactly to stderr, keeping stdout for
//! results. `RUST_LOG` overrides the configured level in both cases.

use crate::config::LoggingConfig;
use anyhow::{Context, Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Where log output may go for the selected mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
    /// Full-screen mode: file only, nothing on the terminal
    FileOnly,
    /// Line-oriented modes: stderr, plus the file when configured
    Stderr,
}

fn fallback_level(level: &str, verbose: bool) -> &str {
    if verbose { "debug" } else { level }
}

/// Filter from `RUST_LOG`, falling back to the configured level
fn build_filter(level: &str, verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_level(level, verbose)))
}

/// Install the global subscriber
///
/// The returned guard flushes the file writer on drop, so the caller keeps it
/// alive until exit. `None` means nothing is written to a file.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created or a subscriber
/// is already installed.
pub fn init(config: &LoggingConfig, sink: LogSink, verbose: bool) -> Result<Option<WorkerGuard>> {
    let filter = build_filter(&config.level, verbose);

    let Some(dir) = &config.dir else {
        return match sink {
            // No file and no terminal: leave tracing without a subscriber
            LogSink::FileOnly => Ok(None),
            LogSink::Stderr => {
                tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .with_target(verbose)
                    .compact()
                    .try_init()
                    .map_err(|err| anyhow!(err))?;
                Ok(None)
            }
        };
    };

    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let appender = tracing_appender::rolling::daily(dir, &config.file_prefix);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let installed = match sink {
        LogSink::FileOnly => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .try_init(),
        LogSink::Stderr => {
            use tracing_subscriber::fmt::writer::MakeWriterExt;

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer.and(std::io::stderr))
                .with_ansi(false)
                .compact()
                .try_init()
        }
    };
    installed.map_err(|err| anyhow!(err))?;

    Ok(Some(guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_overrides_configured_level() {
        assert_eq!(fallback_level("warn", true), "debug");
        assert_eq!(fallback_level("warn", false), "warn");
    }

    #[test]
    fn file_only_without_directory_installs_nothing() {
        let config = LoggingConfig::default();
        let guard = init(&config, LogSink::FileOnly, false).unwrap();
        assert!(guard.is_none());
    }
}

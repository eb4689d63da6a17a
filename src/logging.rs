//! Logging setup for the command-line tool.
//!
//! Library code only emits `tracing` events; the binary decides where they go.

use anyhow::Result;
use std::fs::OpenOptions;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Where log output is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Off,
    Stdout,
    Stderr,
    /// Append to a file
    File(PathBuf),
}

impl LogTarget {
    /// Parse the `--log` option: 0/off, 1/stdout, 2/stderr, or a filename.
    pub fn parse(s: &str) -> Self {
        match s {
            "0" | "off" => LogTarget::Off,
            "1" | "stdout" => LogTarget::Stdout,
            "2" | "stderr" => LogTarget::Stderr,
            filename => LogTarget::File(PathBuf::from(filename)),
        }
    }
}

/// Level filter: `RUST_LOG` when set and valid, otherwise DEBUG when verbose or INFO.
fn filter(verbose: bool) -> EnvFilter {
    filter_from(std::env::var("RUST_LOG").ok().as_deref(), verbose)
}

fn filter_from(rust_log: Option<&str>, verbose: bool) -> EnvFilter {
    if let Some(directives) = rust_log
        && let Ok(filter) = EnvFilter::try_new(directives)
    {
        return filter;
    }

    let level = if verbose { Level::DEBUG } else { Level::INFO };
    EnvFilter::new(level.as_str())
}

/// Install the global subscriber.
pub fn init_logging(target: &LogTarget, verbose: bool) -> Result<()> {
    match target {
        LogTarget::Off => {}
        LogTarget::Stdout => {
            let subscriber = FmtSubscriber::builder()
                .with_env_filter(filter(verbose))
                .with_writer(std::io::stdout)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        LogTarget::Stderr => {
            let subscriber = FmtSubscriber::builder()
                .with_env_filter(filter(verbose))
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let subscriber = FmtSubscriber::builder()
                .with_env_filter(filter(verbose))
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    Ok(())
}

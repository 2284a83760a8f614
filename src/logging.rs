use anyhow::{Context, Result};
use log::LevelFilter;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Where log records go when no log file was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    Stderr,
    /// The terminal belongs to the TUI; drop records instead.
    Silent,
}

pub fn init_logging(debug: bool, log_file: Option<&Path>, fallback: Fallback) -> Result<()> {
    let log_level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(log_level).parse_default_env();

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        None if fallback == Fallback::Silent => {
            builder.filter_level(LevelFilter::Off);
        }
        None => {
            builder.target(env_logger::Target::Stderr);
        }
    }

    builder
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()
        .context("Logger already initialised")?;

    log::debug!("Logging initialized with level: {log_level}");
    Ok(())
}

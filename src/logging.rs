//! Tracing setup.
//!
//! The terminal belongs to the UI, so events go to a log file through a
//! non-blocking writer. `RUST_LOG` takes precedence over the configured
//! filter.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

pub const DEFAULT_FILTER: &str = "info";

/// Where and how verbosely to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogOptions {
	pub file: PathBuf,
	pub filter: String,
}

/// Install the global subscriber. Keep the returned guard alive until exit so
/// buffered events are flushed.
pub fn initialize(options: &LogOptions) -> Result<WorkerGuard> {
	let (dir, file_name) = split_log_path(&options.file)?;
	fs::create_dir_all(dir)
		.with_context(|| format!("failed to create log directory {}", dir.display()))?;

	let appender = tracing_appender::rolling::never(dir, file_name);
	let (writer, guard) = tracing_appender::non_blocking(appender);

	let filter = match EnvFilter::try_from_default_env() {
		Ok(filter) => filter,
		Err(_) => parse_filter(&options.filter)?,
	};

	tracing_subscriber::registry()
		.with(filter)
		.with(
			tracing_subscriber::fmt::layer()
				.with_ansi(false)
				.with_writer(writer),
		)
		.try_init()
		.context("failed to install the tracing subscriber")?;

	Ok(guard)
}

/// Parse a filter directive such as `info` or `contacts_tui=debug`.
pub fn parse_filter(filter: &str) -> Result<EnvFilter> {
	EnvFilter::try_new(filter).map_err(|err| anyhow!("invalid log filter `{filter}`: {err}"))
}

fn split_log_path(path: &Path) -> Result<(&Path, &std::ffi::OsStr)> {
	let file_name = path
		.file_name()
		.ok_or_else(|| anyhow!("log file path `{}` has no file name", path.display()))?;
	let dir = path
		.parent()
		.filter(|parent| !parent.as_os_str().is_empty())
		.unwrap_or(Path::new("."));
	Ok((dir, file_name))
}

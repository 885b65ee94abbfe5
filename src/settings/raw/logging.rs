use std::path::PathBuf;

use anyhow::Result;
use contacts_tui::app_dirs;
use contacts_tui::logging::{DEFAULT_FILTER, LogOptions};
use serde::Deserialize;

use crate::cli::CliArgs;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
	pub(super) file: Option<PathBuf>,
	pub(super) filter: Option<String>,
}

impl LoggingSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(file) = cli.log_file.clone() {
			self.file = Some(file);
		}
		if let Some(filter) = cli.log_filter.clone() {
			self.filter = Some(filter);
		}
	}

	pub(super) fn finalize(self) -> Result<LogOptions> {
		let file = match self.file {
			Some(file) => file,
			None => app_dirs::default_log_file()?,
		};
		let filter = self
			.filter
			.filter(|filter| !filter.trim().is_empty())
			.unwrap_or_else(|| DEFAULT_FILTER.to_string());
		Ok(LogOptions { file, filter })
	}
}

use contacts_tui::logging::LogOptions;
use contacts_tui::ui::theme;
use contacts_tui::{Theme, UiConfig};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub base_url: String,
	pub ui: UiConfig,
	/// Requested theme name; `None` keeps the built-in default.
	pub theme: Option<String>,
	pub logging: LogOptions,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// The selected theme. Names are checked during validation.
	#[must_use]
	pub fn theme(&self) -> Theme {
		self.theme
			.as_deref()
			.and_then(theme::by_name)
			.unwrap_or_default()
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}

use contacts_tui::UiConfig;
use serde::Deserialize;

use crate::cli::CliArgs;

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) create_title: Option<String>,
	pub(super) edit_title: Option<String>,
	pub(super) maintenance_message: Option<String>,
	pub(super) initial_query: Option<String>,
	pub(super) theme: Option<String>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = cli.create_title.clone() {
			self.create_title = Some(title);
		}
		if let Some(title) = cli.edit_title.clone() {
			self.edit_title = Some(title);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
	}

	/// Fill unset labels from the defaults. Returns the UI text and the
	/// requested theme name.
	pub(super) fn finalize(self) -> (UiConfig, Option<String>) {
		let mut ui = UiConfig::default();
		if let Some(title) = non_blank(self.create_title) {
			ui.labels.create_title = title;
		}
		if let Some(title) = non_blank(self.edit_title) {
			ui.labels.edit_title = title;
		}
		if let Some(message) = non_blank(self.maintenance_message) {
			ui.maintenance_message = message;
		}
		ui.initial_query = self.initial_query.unwrap_or_default();

		let theme = non_blank(self.theme).map(|name| name.trim().to_ascii_lowercase());
		(ui, theme)
	}
}

fn non_blank(value: Option<String>) -> Option<String> {
	value.filter(|value| !value.trim().is_empty())
}

use contacts_tui::api::Endpoints;
use contacts_tui::logging::parse_filter;
use contacts_tui::ui::theme;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(config: &ResolvedConfig, sources: &ConfigSources) -> Result<(), ConfigError> {
	if let Err(err) = Endpoints::new(&config.base_url) {
		return Err(ConfigError::invalid(
			"api.base_url",
			config.base_url.clone(),
			sources.source_for_base_url(),
			err,
		));
	}

	if let Some(name) = &config.theme
		&& theme::by_name(name).is_none()
	{
		let known = theme::names().collect::<Vec<_>>().join(", ");
		return Err(ConfigError::invalid(
			"ui.theme",
			name.clone(),
			sources.source_for_theme(),
			format!("unknown theme (expected one of: {known})"),
		));
	}

	if let Err(err) = parse_filter(&config.logging.filter) {
		return Err(ConfigError::invalid(
			"logging.filter",
			config.logging.filter.clone(),
			sources.source_for_log_filter(),
			err,
		));
	}

	Ok(())
}

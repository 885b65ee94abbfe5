use std::fmt::Write;

use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	print!("{}", format_summary(config));
}

fn format_summary(config: &ResolvedConfig) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "Effective configuration:");
	let _ = writeln!(out, "  Service: {}", config.base_url);
	let _ = writeln!(
		out,
		"  UI theme: {}",
		config.theme.as_deref().unwrap_or("default")
	);
	let _ = writeln!(out, "  Create title: {}", config.ui.labels.create_title);
	let _ = writeln!(out, "  Edit title: {}", config.ui.labels.edit_title);
	if !config.ui.initial_query.is_empty() {
		let _ = writeln!(out, "  Initial query: {}", config.ui.initial_query);
	}
	let _ = writeln!(out, "  Log file: {}", config.logging.file.display());
	let _ = writeln!(out, "  Log filter: {}", config.logging.filter);
	out
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use contacts_tui::UiConfig;
	use contacts_tui::logging::LogOptions;

	use super::*;

	#[test]
	fn summary_lists_service_and_logging() {
		let config = ResolvedConfig {
			base_url: "http://127.0.0.1:5000".into(),
			ui: UiConfig {
				initial_query: "ann".into(),
				..UiConfig::default()
			},
			theme: Some("light".into()),
			logging: LogOptions {
				file: PathBuf::from("/tmp/contacts.log"),
				filter: "debug".into(),
			},
		};

		let summary = format_summary(&config);
		assert!(summary.contains("Service: http://127.0.0.1:5000"));
		assert!(summary.contains("UI theme: light"));
		assert!(summary.contains("Initial query: ann"));
		assert!(summary.contains("Log filter: debug"));
	}
}

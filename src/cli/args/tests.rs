use clap::{CommandFactory, Parser};

use super::{CliArgs, ExportFormat};

#[test]
fn command_definition_is_consistent() {
	let command = CliArgs::command();
	command.clone().debug_assert();
	assert!(command.get_about().is_some());
}

#[test]
fn defaults_open_the_interactive_ui() {
	let parsed = CliArgs::parse_from(["contacts"]);
	assert_eq!(parsed.export, None);
	assert!(parsed.config.is_empty());
	assert!(parsed.base_url.is_none());
	assert!(!parsed.no_config);
}

#[test]
fn export_and_overrides_are_parsed() {
	let parsed = CliArgs::parse_from([
		"contacts",
		"--export",
		"json",
		"--base-url",
		"http://contacts.internal:8080",
		"-q",
		"ann",
		"-c",
		"a.toml",
		"-c",
		"b.toml",
	]);
	assert_eq!(parsed.export, Some(ExportFormat::Json));
	assert_eq!(parsed.base_url.as_deref(), Some("http://contacts.internal:8080"));
	assert_eq!(parsed.initial_query.as_deref(), Some("ann"));
	assert_eq!(parsed.config.len(), 2);
}

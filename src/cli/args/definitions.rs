use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::ExportFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `contacts` binary.
#[derive(Parser, Debug)]
#[command(
	name = "contacts",
	version,
	long_version = long_version(),
	about = "Terminal address book for a contacts REST service",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "CONTACTS_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'b',
		long = "base-url",
		value_name = "URL",
		help = "Root URL of the contacts service (default: http://127.0.0.1:5000)"
	)]
	pub(crate) base_url: Option<String>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Search to run once the list has loaded (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: default)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "create-title",
		value_name = "TEXT",
		help = "Title of the form when adding a contact (default: Add Contact)"
	)]
	pub(crate) create_title: Option<String>,
	#[arg(
		long = "edit-title",
		value_name = "TEXT",
		help = "Title of the form when editing a contact (default: Edit Contact)"
	)]
	pub(crate) edit_title: Option<String>,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		help = "Write logs to this file (default: contacts.log in the data directory)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(
		long = "log-filter",
		value_name = "FILTER",
		help = "Tracing filter directive, overridden by RUST_LOG (default: info)"
	)]
	pub(crate) log_filter: Option<String>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'e',
		long = "export",
		value_enum,
		value_name = "FORMAT",
		help = "Load the list once, print it and exit instead of opening the UI"
	)]
	pub(crate) export: Option<ExportFormat>,
}

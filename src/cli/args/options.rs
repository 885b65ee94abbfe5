use clap::ValueEnum;

/// Formats `--export` can print the contact list in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ExportFormat {
	/// The list container markup, cards escaped for HTML.
	Html,
	/// The contacts as returned by the service.
	Json,
}

mod cli;
mod settings;

use anyhow::{Context, Result, bail};
use cli::{ExportFormat, parse_cli, print_export};
use contacts_tui::ui::theme;
use contacts_tui::{Command, ContactViewController, HttpContactsApi, MarkupSurface, logging};
use settings::ResolvedConfig;
use tracing::{info, warn};

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let _log_guard = logging::initialize(&resolved.logging)?;
	info!(base_url = %resolved.base_url, "starting contacts");

	let api = HttpContactsApi::new(&resolved.base_url)
		.with_context(|| format!("cannot use `{}` as the service URL", resolved.base_url))?;

	match cli.export {
		Some(format) => run_export(format, api, &resolved),
		None => contacts_tui::run(api, resolved.ui.clone(), resolved.theme()),
	}
}

/// Load the list once without a terminal UI and print it.
fn run_export(format: ExportFormat, api: HttpContactsApi, settings: &ResolvedConfig) -> Result<()> {
	let mut controller = ContactViewController::new(api, MarkupSurface::default())
		.with_labels(settings.ui.labels.clone());
	controller.dispatch(Command::Initialize);
	if !controller.surface().in_maintenance() && !settings.ui.initial_query.is_empty() {
		controller.dispatch(Command::Search(settings.ui.initial_query.clone()));
	}

	let surface = controller.into_surface();
	if surface.in_maintenance() {
		bail!(
			"{} ({})",
			settings.ui.maintenance_message,
			settings.base_url
		);
	}
	for alert in surface.alerts() {
		warn!(%alert, "alert raised during export");
		eprintln!("{alert}");
	}

	print_export(format, &surface)
}

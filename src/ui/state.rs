use ratatui::widgets::TableState;
use tracing::debug;
use tui_textarea::TextArea;

use super::config::UiConfig;
use super::form::single_line;
use super::surface::TuiSurface;
use super::theme::Theme;
use crate::api::ContactsApi;
use crate::controller::{Command, ContactViewController};
use crate::view::CardView;

pub struct App<A> {
	pub(crate) controller: ContactViewController<A, TuiSurface>,
	pub(crate) search_input: TextArea<'static>,
	pub(crate) search_focused: bool,
	pub(crate) table_state: TableState,
	pub(crate) ui: UiConfig,
	pub theme: Theme,
}

impl<A: ContactsApi> App<A> {
	pub fn new(api: A, ui: UiConfig) -> Self {
		let controller =
			ContactViewController::new(api, TuiSurface::default()).with_labels(ui.labels.clone());
		let mut table_state = TableState::default();
		table_state.select(Some(0));
		Self {
			controller,
			search_input: single_line(ui.initial_query.clone()),
			search_focused: false,
			table_state,
			ui,
			theme: Theme::default(),
		}
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
	}

	#[must_use]
	pub fn surface(&self) -> &TuiSurface {
		self.controller.surface()
	}

	#[must_use]
	pub fn controller(&self) -> &ContactViewController<A, TuiSurface> {
		&self.controller
	}

	/// Run the startup sequence: health probe and initial list, followed by
	/// the configured initial search when the service is up.
	pub fn start(&mut self) {
		self.dispatch(Command::Initialize);
		let query = self.ui.initial_query.clone();
		if !self.surface().in_maintenance() && !query.is_empty() {
			self.dispatch(Command::Search(query));
		}
	}

	pub(crate) fn dispatch(&mut self, command: Command) {
		debug!(?command, "dispatching command");
		self.controller.dispatch(command);
		self.ensure_selection();
	}

	#[must_use]
	pub fn search_text(&self) -> String {
		self.search_input.lines().concat()
	}

	pub(crate) fn selected_card(&self) -> Option<&CardView> {
		let selected = self.table_state.selected()?;
		self.surface().list().cards().get(selected)
	}

	pub(crate) fn ensure_selection(&mut self) {
		let len = self.surface().list().len();
		if len == 0 {
			self.table_state.select(None);
		} else if self.table_state.selected().is_none() {
			self.table_state.select(Some(0));
		} else if let Some(selected) = self.table_state.selected()
			&& selected >= len
		{
			self.table_state.select(Some(len.saturating_sub(1)));
		}
	}
}

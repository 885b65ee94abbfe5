use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::App;
use super::components::{DialogKind, centered_rect, render_contacts, render_dialog, render_form};
use super::form::style_input;
use crate::api::ContactsApi;

const LIST_HINTS: &str = "/ search · a add · e edit · d delete · r reload · q quit";
const SEARCH_HINTS: &str = "Enter search · Esc back to list";
const FORM_HINTS: &str = "Tab next field · Enter save · Esc cancel";

impl<A: ContactsApi> App<A> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		if self.surface().in_maintenance() {
			self.render_maintenance(frame, area);
			return;
		}

		let [search_area, list_area, hints_area] = Layout::vertical([
			Constraint::Length(3),
			Constraint::Min(1),
			Constraint::Length(1),
		])
		.areas(area);

		style_input(
			&mut self.search_input,
			&self.ui.search_title,
			self.search_focused,
			&self.theme,
		);
		frame.render_widget(&self.search_input, search_area);

		let surface = self.controller.surface();
		render_contacts(
			frame,
			list_area,
			surface.list(),
			&mut self.table_state,
			&self.theme,
		);
		frame.render_widget(
			Paragraph::new(Span::styled(self.hints(), self.theme.prompt_style())),
			hints_area,
		);

		if let Some(form) = self.controller.surface_mut().form.as_mut() {
			render_form(frame, area, form, &self.theme);
		}

		let surface = self.controller.surface();
		if let Some(prompt) = surface.confirmation() {
			render_dialog(frame, area, DialogKind::Confirm, prompt, &self.theme);
		}
		if let Some(message) = surface.current_alert() {
			render_dialog(frame, area, DialogKind::Alert, message, &self.theme);
		}
	}

	fn hints(&self) -> &'static str {
		if self.surface().form().is_some() {
			FORM_HINTS
		} else if self.search_focused {
			SEARCH_HINTS
		} else {
			LIST_HINTS
		}
	}

	fn render_maintenance(&self, frame: &mut Frame, area: Rect) {
		let panel = centered_rect(area, 64, 7);
		let block = Block::default()
			.borders(Borders::ALL)
			.border_style(self.theme.focus_border_style())
			.title("Maintenance");
		let body = Paragraph::new(vec![
			Line::from(self.ui.maintenance_message.clone()),
			Line::default(),
			Line::from(Span::styled("q to quit", self.theme.prompt_style())),
		])
		.alignment(Alignment::Center)
		.wrap(Wrap { trim: true })
		.block(block);
		frame.render_widget(body, panel);
	}
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;
	use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

	use super::*;
	use crate::api::Contact;
	use crate::controller::tests::FakeApi;
	use crate::ui::UiConfig;

	fn render(app: &mut App<FakeApi>) -> String {
		let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
		terminal.draw(|frame| app.draw(frame)).unwrap();
		let buffer = terminal.backend().buffer();
		let mut text = String::new();
		for y in 0..buffer.area.height {
			for x in 0..buffer.area.width {
				text.push_str(buffer[(x, y)].symbol());
			}
			text.push('\n');
		}
		text
	}

	fn app(contacts: Vec<Contact>) -> App<FakeApi> {
		let mut app = App::new(FakeApi::with_contacts(contacts), UiConfig::default());
		app.start();
		app
	}

	#[test]
	fn list_shows_a_row_per_contact() {
		let mut app = app(vec![
			Contact::new("1", "Ada Lovelace").with_email("ada@example.com"),
			Contact::new("2", "Cher"),
		]);
		let screen = render(&mut app);
		assert!(screen.contains("Search"));
		assert!(screen.contains("AL"));
		assert!(screen.contains("Ada Lovelace"));
		assert!(screen.contains("ada@example.com"));
		assert!(screen.contains("Cher"));
		assert!(!screen.contains("No contacts found"));
		assert!(screen.contains("a add"));
	}

	#[test]
	fn empty_list_shows_the_placeholder() {
		let mut app = app(Vec::new());
		let screen = render(&mut app);
		assert!(screen.contains("No contacts found"));
	}

	#[test]
	fn form_and_confirmation_overlay_the_list() {
		let mut app = app(vec![Contact::new("1", "Ada Lovelace")]);
		app.handle_key(KeyEvent::new(KeyCode::Char('e'), KeyModifiers::NONE));
		let screen = render(&mut app);
		assert!(screen.contains("Edit Contact"));
		assert!(screen.contains("Address"));
		assert!(screen.contains("Esc cancel"));

		app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
		app.handle_key(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE));
		let screen = render(&mut app);
		assert!(screen.contains("Confirm"));
		assert!(screen.contains("delete this contact?"));
	}

	#[test]
	fn maintenance_replaces_the_whole_screen() {
		let api = FakeApi::default();
		api.unhealthy.set(true);
		let mut app = App::new(api, UiConfig::default());
		app.start();
		let screen = render(&mut app);
		assert!(screen.contains("Maintenance"));
		assert!(screen.contains("currently unavailable"));
		assert!(!screen.contains("Search"));
	}
}

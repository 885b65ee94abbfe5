use ratatui::crossterm::event::{KeyCode, KeyEvent};

use super::App;
use super::form::single_line_input;
use crate::api::ContactsApi;
use crate::controller::Command;

/// Whether the event loop should keep running after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
	Continue,
	Exit,
}

impl<A: ContactsApi> App<A> {
	/// Route a key press to whichever layer is on top: maintenance screen,
	/// alert, confirmation, form, search box, then the list.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Flow {
		if self.surface().in_maintenance() {
			return match key.code {
				KeyCode::Char('q') | KeyCode::Esc => Flow::Exit,
				_ => Flow::Continue,
			};
		}

		if self.surface().current_alert().is_some() {
			if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
				self.controller.surface_mut().dismiss_alert();
			}
			return Flow::Continue;
		}

		if self.surface().confirmation().is_some() {
			self.handle_confirmation_key(key);
			return Flow::Continue;
		}

		if self.surface().form().is_some() {
			self.handle_form_key(key);
			return Flow::Continue;
		}

		if self.search_focused {
			self.handle_search_key(key);
			return Flow::Continue;
		}

		self.handle_list_key(key)
	}

	fn handle_confirmation_key(&mut self, key: KeyEvent) {
		let answer = match key.code {
			KeyCode::Char('y' | 'Y') => true,
			KeyCode::Char('n' | 'N') | KeyCode::Esc => false,
			_ => return,
		};
		self.controller.surface_mut().confirmation = None;
		self.dispatch(Command::ResolveDelete(answer));
	}

	fn handle_form_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Esc => self.dispatch(Command::CloseModal),
			KeyCode::Enter => {
				if let Some(fields) = self.surface().form().map(|form| form.fields()) {
					self.dispatch(Command::Submit(fields));
				}
			}
			KeyCode::Tab | KeyCode::Down => {
				if let Some(form) = self.controller.surface_mut().form.as_mut() {
					form.focus_next();
				}
			}
			KeyCode::BackTab | KeyCode::Up => {
				if let Some(form) = self.controller.surface_mut().form.as_mut() {
					form.focus_prev();
				}
			}
			_ => {
				if let Some(form) = self.controller.surface_mut().form.as_mut() {
					form.input(key);
				}
			}
		}
	}

	fn handle_search_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Enter => {
				self.search_focused = false;
				let query = self.search_text();
				self.dispatch(Command::Search(query));
			}
			KeyCode::Esc => self.search_focused = false,
			_ => {
				single_line_input(&mut self.search_input, key);
			}
		}
	}

	fn handle_list_key(&mut self, key: KeyEvent) -> Flow {
		match key.code {
			KeyCode::Char('q') | KeyCode::Esc => return Flow::Exit,
			KeyCode::Char('/') => self.search_focused = true,
			KeyCode::Char('a') => self.dispatch(Command::OpenCreate),
			KeyCode::Char('e') | KeyCode::Enter => {
				if let Some(contact) = self.selected_card().map(|card| card.edit.clone()) {
					self.dispatch(Command::OpenEdit(contact));
				}
			}
			KeyCode::Char('d') | KeyCode::Delete => {
				if let Some(id) = self.selected_card().map(|card| card.delete_target().clone()) {
					self.dispatch(Command::Delete(id));
				}
			}
			KeyCode::Char('r') => self.dispatch(Command::Reload),
			KeyCode::Up | KeyCode::Char('k') => self.move_selection_up(),
			KeyCode::Down | KeyCode::Char('j') => self.move_selection_down(),
			_ => {}
		}
		Flow::Continue
	}

	fn move_selection_up(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected > 0
		{
			self.table_state.select(Some(selected - 1));
		}
	}

	fn move_selection_down(&mut self) {
		if let Some(selected) = self.table_state.selected() {
			let len = self.surface().list().len();
			if selected + 1 < len {
				self.table_state.select(Some(selected + 1));
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use ratatui::crossterm::event::KeyModifiers;

	use super::*;
	use crate::api::{Contact, ContactFields, ContactId};
	use crate::controller::tests::{FakeApi, Request};
	use crate::ui::UiConfig;

	fn press(app: &mut App<FakeApi>, code: KeyCode) -> Flow {
		app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
	}

	fn type_text(app: &mut App<FakeApi>, text: &str) {
		for ch in text.chars() {
			press(app, KeyCode::Char(ch));
		}
	}

	fn started_app() -> App<FakeApi> {
		let mut app = App::new(
			FakeApi::with_contacts(vec![
				Contact::new("1", "Ada Lovelace").with_phone("555"),
				Contact::new("2", "Annie Easley"),
			]),
			UiConfig::default(),
		);
		app.start();
		app.controller().api().clear_requests();
		app
	}

	#[test]
	fn search_box_submits_on_enter() {
		let mut app = started_app();
		press(&mut app, KeyCode::Char('/'));
		type_text(&mut app, "Ann");
		press(&mut app, KeyCode::Enter);

		assert!(!app.search_focused);
		assert_eq!(
			app.controller().api().requests(),
			vec![Request::List(Some("Ann".into()))]
		);
		assert_eq!(app.surface().list().len(), 1);
	}

	#[test]
	fn search_box_stays_on_one_line() {
		let mut app = started_app();
		press(&mut app, KeyCode::Char('/'));
		type_text(&mut app, "An");
		app.handle_key(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::CONTROL));
		app.handle_key(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL));
		type_text(&mut app, "n");

		assert!(app.search_focused);
		assert_eq!(app.search_input.lines(), ["Ann"]);
	}

	#[test]
	fn add_then_enter_creates_a_contact() {
		let mut app = started_app();
		press(&mut app, KeyCode::Char('a'));
		assert_eq!(app.surface().form().map(|form| form.title()), Some("Add Contact"));

		type_text(&mut app, "Grace");
		press(&mut app, KeyCode::Tab);
		type_text(&mut app, "123");
		press(&mut app, KeyCode::Enter);

		assert!(app.surface().form().is_none());
		assert_eq!(
			app.controller().api().requests(),
			vec![
				Request::Create(ContactFields::new("Grace", "123", "", "")),
				Request::List(None)
			]
		);
		assert_eq!(app.surface().list().len(), 3);
	}

	#[test]
	fn edit_prefills_from_the_selected_card_without_fetching() {
		let mut app = started_app();
		press(&mut app, KeyCode::Char('e'));

		let form = app.surface().form().unwrap();
		assert_eq!(form.title(), "Edit Contact");
		assert_eq!(form.fields(), ContactFields::new("Ada Lovelace", "555", "", ""));
		assert!(app.controller().api().requests().is_empty());

		press(&mut app, KeyCode::Enter);
		assert_eq!(
			app.controller().api().requests()[0],
			Request::Update(
				ContactId::new("1"),
				ContactFields::new("Ada Lovelace", "555", "", "")
			)
		);
	}

	#[test]
	fn escape_cancels_the_form() {
		let mut app = started_app();
		press(&mut app, KeyCode::Char('a'));
		press(&mut app, KeyCode::Esc);
		assert!(app.surface().form().is_none());
		assert!(app.controller().api().requests().is_empty());
	}

	#[test]
	fn delete_waits_for_confirmation() {
		let mut app = started_app();
		press(&mut app, KeyCode::Down);
		press(&mut app, KeyCode::Char('d'));
		assert!(app.surface().confirmation().is_some());
		assert!(app.controller().api().requests().is_empty());

		press(&mut app, KeyCode::Char('n'));
		assert!(app.surface().confirmation().is_none());
		assert!(app.controller().api().requests().is_empty());

		press(&mut app, KeyCode::Char('d'));
		press(&mut app, KeyCode::Char('y'));
		assert_eq!(
			app.controller().api().requests(),
			vec![Request::Delete(ContactId::new("2")), Request::List(None)]
		);
		assert_eq!(app.surface().list().len(), 1);
	}

	#[test]
	fn alerts_block_input_until_dismissed() {
		let mut app = started_app();
		app.controller().api().fail_deletes.set(true);
		press(&mut app, KeyCode::Char('d'));
		press(&mut app, KeyCode::Char('y'));
		assert_eq!(app.surface().current_alert(), Some("Failed to delete contact"));

		press(&mut app, KeyCode::Char('a'));
		assert!(app.surface().form().is_none());

		press(&mut app, KeyCode::Enter);
		assert_eq!(app.surface().current_alert(), None);
	}

	#[test]
	fn quitting_from_the_list_and_maintenance() {
		let mut app = started_app();
		assert_eq!(press(&mut app, KeyCode::Char('j')), Flow::Continue);
		assert_eq!(press(&mut app, KeyCode::Char('q')), Flow::Exit);

		let api = FakeApi::default();
		api.unhealthy.set(true);
		let mut app = App::new(api, UiConfig::default());
		app.start();
		assert_eq!(press(&mut app, KeyCode::Char('a')), Flow::Continue);
		assert_eq!(press(&mut app, KeyCode::Esc), Flow::Exit);
	}
}

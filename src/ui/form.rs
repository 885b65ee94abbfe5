use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders};
use tui_textarea::{CursorMove, TextArea};

use super::theme::Theme;
use crate::api::ContactFields;
use crate::view::FormView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
	Name,
	Phone,
	Email,
	Address,
}

impl FormField {
	pub const ALL: [Self; 4] = [Self::Name, Self::Phone, Self::Email, Self::Address];

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::Name => "Name",
			Self::Phone => "Phone",
			Self::Email => "Email",
			Self::Address => "Address",
		}
	}

	fn index(self) -> usize {
		self as usize
	}

	fn next(self) -> Self {
		Self::ALL[(self.index() + 1) % Self::ALL.len()]
	}

	fn prev(self) -> Self {
		Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
	}
}

/// The modal form: one single-line input per contact field.
pub struct ContactForm {
	title: String,
	inputs: [TextArea<'static>; 4],
	focus: FormField,
}

impl ContactForm {
	#[must_use]
	pub fn new(view: FormView) -> Self {
		let FormView { title, fields } = view;
		let inputs = [fields.name, fields.phone, fields.email, fields.address].map(single_line);
		Self {
			title,
			inputs,
			focus: FormField::Name,
		}
	}

	#[must_use]
	pub fn title(&self) -> &str {
		&self.title
	}

	#[must_use]
	pub fn focus(&self) -> FormField {
		self.focus
	}

	pub fn focus_next(&mut self) {
		self.focus = self.focus.next();
	}

	pub fn focus_prev(&mut self) {
		self.focus = self.focus.prev();
	}

	#[must_use]
	pub fn value(&self, field: FormField) -> String {
		self.inputs[field.index()].lines().concat()
	}

	/// Current values of every input.
	#[must_use]
	pub fn fields(&self) -> ContactFields {
		ContactFields::new(
			self.value(FormField::Name),
			self.value(FormField::Phone),
			self.value(FormField::Email),
			self.value(FormField::Address),
		)
	}

	/// Forward a key press to the focused input. Returns whether the text
	/// changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		single_line_input(&mut self.inputs[self.focus.index()], key)
	}

	/// Restyle every input so only the focused one shows a cursor.
	pub(crate) fn apply_theme(&mut self, theme: &Theme) {
		for (field, input) in FormField::ALL.into_iter().zip(self.inputs.iter_mut()) {
			style_input(input, field.label(), field == self.focus, theme);
		}
	}

	pub(crate) fn inputs(&self) -> impl Iterator<Item = &TextArea<'static>> {
		self.inputs.iter()
	}
}

pub(crate) fn single_line(value: String) -> TextArea<'static> {
	let mut input = TextArea::new(vec![value]);
	input.set_cursor_line_style(Style::default());
	input.move_cursor(CursorMove::End);
	input
}

/// Forward `key` to a one-line input, dropping the keys the text area
/// would turn into a line break.
pub(crate) fn single_line_input(input: &mut TextArea<'static>, key: KeyEvent) -> bool {
	let line_break = match key.code {
		KeyCode::Enter => true,
		KeyCode::Char('j' | 'm') => key.modifiers.contains(KeyModifiers::CONTROL),
		_ => false,
	};
	!line_break && input.input(key)
}

/// Apply the bordered, labelled look shared by the form inputs and the
/// search box.
pub(crate) fn style_input(input: &mut TextArea<'static>, label: &str, focused: bool, theme: &Theme) {
	let border = if focused {
		theme.focus_border_style()
	} else {
		Style::default()
	};
	input.set_block(
		Block::default()
			.borders(Borders::ALL)
			.border_style(border)
			.title(label.to_string()),
	);
	input.set_cursor_style(if focused {
		theme.cursor_style()
	} else {
		Style::default()
	});
}

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::widgets::{Block, Borders, Clear};

use crate::ui::form::{ContactForm, FormField};
use crate::ui::theme::Theme;

const INPUT_HEIGHT: u16 = 3;
const MODAL_WIDTH: u16 = 60;

/// Rectangle of at most `width` x `height` centered inside `area`.
#[must_use]
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
	let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
		.flex(Flex::Center)
		.areas(area);
	let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
		.flex(Flex::Center)
		.areas(row);
	cell
}

/// Draw the add/edit form as a modal over `area`.
pub fn render_form(frame: &mut Frame, area: Rect, form: &mut ContactForm, theme: &Theme) {
	let fields = FormField::ALL.len() as u16;
	let modal = centered_rect(area, MODAL_WIDTH, fields * INPUT_HEIGHT + 2);
	let block = Block::default()
		.borders(Borders::ALL)
		.title(form.title().to_string())
		.title_style(theme.header_style());
	let inner = block.inner(modal);
	frame.render_widget(Clear, modal);
	frame.render_widget(block, modal);

	form.apply_theme(theme);
	let slots = Layout::vertical(FormField::ALL.map(|_| Constraint::Length(INPUT_HEIGHT))).split(inner);
	for (input, slot) in form.inputs().zip(slots.iter()) {
		frame.render_widget(input, *slot);
	}
}

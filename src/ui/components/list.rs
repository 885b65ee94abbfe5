use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Cell, Clear, HighlightSpacing, Paragraph, Row, Table, TableState};

use crate::ui::theme::Theme;
use crate::view::{CardView, DetailKind, EMPTY_PLACEHOLDER, ListView};

const HIGHLIGHT_SYMBOL: &str = "▶ ";
const TABLE_COLUMN_SPACING: u16 = 1;
const HEADER_HEIGHT: u16 = 2;

const COLUMNS: [(&str, Constraint); 5] = [
	("", Constraint::Length(3)),
	("Name", Constraint::Fill(2)),
	("Phone", Constraint::Fill(1)),
	("Email", Constraint::Fill(2)),
	("Address", Constraint::Fill(2)),
];

/// Render the contact cards as table rows, or the placeholder when the list
/// is empty.
pub fn render_contacts(
	frame: &mut Frame,
	area: Rect,
	list: &ListView,
	table_state: &mut TableState,
	theme: &Theme,
) {
	let header = Row::new(COLUMNS.iter().map(|(title, _)| Cell::from(*title)))
		.style(theme.header_style())
		.height(1)
		.bottom_margin(1);
	let rows = list.cards().iter().map(card_row);
	let table = Table::new(rows, COLUMNS.map(|(_, width)| width))
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::WhenSelected)
		.row_highlight_style(theme.row_highlight_style())
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, area, table_state);

	if list.shows_placeholder() && area.height > HEADER_HEIGHT {
		let message_area = Rect {
			y: area.y + HEADER_HEIGHT,
			height: area.height - HEADER_HEIGHT,
			..area
		};
		let empty = Paragraph::new(EMPTY_PLACEHOLDER)
			.alignment(Alignment::Center)
			.style(theme.empty_style());
		frame.render_widget(Clear, message_area);
		frame.render_widget(empty, message_area);
	}
}

fn card_row(card: &CardView) -> Row<'static> {
	let detail = |kind| Cell::from(card.detail(kind).unwrap_or_default().to_string());
	Row::new([
		Cell::from(Line::from(card.initials.clone())),
		Cell::from(card.name.clone()),
		detail(DetailKind::Phone),
		detail(DetailKind::Email),
		detail(DetailKind::Address),
	])
}

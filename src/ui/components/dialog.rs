use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use super::centered_rect;
use crate::ui::theme::Theme;

const MAX_WIDTH: u16 = 56;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
	Alert,
	Confirm,
}

impl DialogKind {
	fn title(self) -> &'static str {
		match self {
			Self::Alert => "Error",
			Self::Confirm => "Confirm",
		}
	}

	fn hint(self) -> &'static str {
		match self {
			Self::Alert => "Enter to dismiss",
			Self::Confirm => "y to confirm · n to cancel",
		}
	}
}

/// Draw a small centered box with `message` and the keys that close it.
pub fn render_dialog(frame: &mut Frame, area: Rect, kind: DialogKind, message: &str, theme: &Theme) {
	let (width, height) = dialog_size(kind, message);
	let dialog = centered_rect(area, width, height);

	let block = Block::default()
		.borders(Borders::ALL)
		.border_style(theme.focus_border_style())
		.title(kind.title());
	let body = Paragraph::new(vec![
		Line::from(message.to_string()),
		Line::default(),
		Line::from(Span::styled(kind.hint(), theme.prompt_style())),
	])
	.alignment(Alignment::Center)
	.wrap(Wrap { trim: true })
	.block(block);

	frame.render_widget(Clear, dialog);
	frame.render_widget(body, dialog);
}

/// Outer size of the dialog box. Long messages wrap at [`MAX_WIDTH`].
fn dialog_size(kind: DialogKind, message: &str) -> (u16, u16) {
	let inner_width = MAX_WIDTH - 4;
	let message_width = u16::try_from(message.width()).unwrap_or(u16::MAX);
	let hint_width = u16::try_from(kind.hint().width()).unwrap_or(u16::MAX);
	let width = message_width.max(hint_width).min(inner_width) + 4;
	let message_lines = message_width.div_ceil(inner_width).max(1);
	(width, message_lines.saturating_add(4))
}

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
	pub header: Style,
	pub row_highlight: Style,
	pub prompt: Style,
	pub empty: Style,
	pub highlight: Style,
}

impl Theme {
	#[must_use]
	pub fn header_style(&self) -> Style {
		self.header
	}

	#[must_use]
	pub fn row_highlight_style(&self) -> Style {
		self.row_highlight
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	/// Border style for the input that currently has focus.
	#[must_use]
	pub fn focus_border_style(&self) -> Style {
		Style::new().fg(self.highlight.fg.unwrap_or(Color::Reset))
	}

	#[must_use]
	pub fn cursor_style(&self) -> Style {
		Style::new().add_modifier(Modifier::REVERSED)
	}
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

/// Definition for a built-in theme bundled with the application.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub theme: Theme,
	pub aliases: &'static [&'static str],
}

impl ThemeDefinition {
	pub const fn new(name: &'static str, theme: Theme) -> Self {
		Self {
			name,
			theme,
			aliases: &[],
		}
	}

	pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
		self.aliases = aliases;
		self
	}

	fn matches(&self, name: &str) -> bool {
		self.name.eq_ignore_ascii_case(name)
			|| self
				.aliases
				.iter()
				.any(|alias| alias.eq_ignore_ascii_case(name))
	}
}

const DARK: Theme = Theme {
	header: Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
	row_highlight: Style::new().fg(Color::Black).bg(Color::Cyan),
	prompt: Style::new().fg(Color::Cyan),
	empty: Style::new().fg(Color::DarkGray),
	highlight: Style::new().fg(Color::Yellow),
};

const LIGHT: Theme = Theme {
	header: Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD),
	row_highlight: Style::new().fg(Color::White).bg(Color::Blue),
	prompt: Style::new().fg(Color::Blue),
	empty: Style::new().fg(Color::Gray),
	highlight: Style::new().fg(Color::Magenta),
};

static BUILTINS: [ThemeDefinition; 2] = [
	ThemeDefinition::new("default", DARK).with_aliases(&["dark"]),
	ThemeDefinition::new("light", LIGHT),
];

#[must_use]
pub fn default_theme() -> Theme {
	DARK
}

/// Names of the built-in themes, in registration order.
pub fn names() -> impl Iterator<Item = &'static str> {
	BUILTINS.iter().map(|definition| definition.name)
}

/// Look up a built-in theme by name or alias, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	BUILTINS
		.iter()
		.find(|definition| definition.matches(name))
		.map(|definition| definition.theme)
}

use ratatui::style::{Color, Modifier, Style};

/// Styles for every part of the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Border of the control and the dropdown.
	pub border: Style,
	/// Border of the control while it has focus.
	pub border_focused: Style,
	/// A selected item shown as a chip.
	pub chip: Style,
	/// Filter text typed by the user.
	pub prompt: Style,
	/// Placeholder shown while nothing is selected.
	pub placeholder: Style,
	/// Row under the keyboard or pointer focus.
	pub row_focused: Style,
	/// Row whose item is selected.
	pub row_selected: Style,
	/// "no data" message and other muted text.
	pub empty: Style,
	/// Key hints at the bottom of the screen.
	pub hint: Style,
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

/// A theme bundled with the picker.
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

const DEFAULT: Theme = Theme {
	border: Style::new().fg(Color::DarkGray),
	border_focused: Style::new().fg(Color::Cyan),
	chip: Style::new().fg(Color::Black).bg(Color::Cyan),
	prompt: Style::new().fg(Color::White),
	placeholder: Style::new().fg(Color::DarkGray),
	row_focused: Style::new().bg(Color::Rgb(45, 55, 72)),
	row_selected: Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
	empty: Style::new().fg(Color::DarkGray),
	hint: Style::new().fg(Color::DarkGray),
};

const LIGHT: Theme = Theme {
	border: Style::new().fg(Color::Rgb(148, 163, 184)),
	border_focused: Style::new().fg(Color::Rgb(0, 102, 153)),
	chip: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(226, 232, 240)),
	prompt: Style::new().fg(Color::Rgb(15, 23, 42)),
	placeholder: Style::new().fg(Color::Rgb(100, 100, 100)),
	row_focused: Style::new().bg(Color::Rgb(200, 200, 200)),
	row_selected: Style::new()
		.fg(Color::Rgb(0, 102, 153))
		.add_modifier(Modifier::BOLD),
	empty: Style::new().fg(Color::Rgb(100, 100, 100)),
	hint: Style::new().fg(Color::Rgb(100, 100, 100)),
};

const SOLARIZED: Theme = Theme {
	border: Style::new().fg(Color::Rgb(88, 110, 117)),
	border_focused: Style::new().fg(Color::Rgb(38, 139, 210)),
	chip: Style::new()
		.fg(Color::Rgb(0, 43, 54))
		.bg(Color::Rgb(42, 161, 152)),
	prompt: Style::new().fg(Color::Rgb(147, 161, 161)),
	placeholder: Style::new().fg(Color::Rgb(88, 110, 117)),
	row_focused: Style::new().bg(Color::Rgb(7, 54, 66)),
	row_selected: Style::new()
		.fg(Color::Rgb(181, 137, 0))
		.add_modifier(Modifier::BOLD),
	empty: Style::new().fg(Color::Rgb(88, 110, 117)),
	hint: Style::new().fg(Color::Rgb(88, 110, 117)),
};

const BUILTINS: &[ThemeDefinition] = &[
	ThemeDefinition::new("default", DEFAULT).with_aliases(&["dark"]),
	ThemeDefinition::new("light", LIGHT),
	ThemeDefinition::new("solarized", SOLARIZED).with_aliases(&["solarized-dark"]),
];

#[must_use]
pub fn default_theme() -> Theme {
	DEFAULT
}

/// Return the built-in themes bundled with the picker.
#[must_use]
pub fn builtin_themes() -> &'static [ThemeDefinition] {
	BUILTINS
}

/// Look up a built-in theme by name or alias, ignoring ASCII case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let name = name.trim();
	BUILTINS
		.iter()
		.find(|definition| definition.matches(name))
		.map(|definition| definition.theme)
}

/// Canonical names of the built-in themes.
#[must_use]
pub fn names() -> Vec<&'static str> {
	BUILTINS.iter().map(|definition| definition.name).collect()
}

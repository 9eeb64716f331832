use anyhow::{Context, Result, bail};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use super::Theme;

/// Colours and modifiers for one themed element, as written in configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StyleSpec {
	pub fg: Option<String>,
	pub bg: Option<String>,
	pub modifiers: Vec<String>,
}

impl StyleSpec {
	/// Layer these colours and modifiers on top of `base`.
	pub fn patch(&self, base: Style, context: &str) -> Result<Style> {
		let mut style = base;
		if let Some(fg) = &self.fg {
			let color =
				parse_color(fg).with_context(|| format!("{context}: invalid foreground `{fg}`"))?;
			style = style.fg(color);
		}
		if let Some(bg) = &self.bg {
			let color =
				parse_color(bg).with_context(|| format!("{context}: invalid background `{bg}`"))?;
			style = style.bg(color);
		}
		for modifier in &self.modifiers {
			let modifier = parse_modifier(modifier)
				.with_context(|| format!("{context}: invalid modifier `{modifier}`"))?;
			style = style.add_modifier(modifier);
		}
		Ok(style)
	}
}

/// Per-element replacements applied on top of a named theme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StyleOverrides {
	pub border: Option<StyleSpec>,
	pub border_focused: Option<StyleSpec>,
	pub chip: Option<StyleSpec>,
	pub prompt: Option<StyleSpec>,
	pub placeholder: Option<StyleSpec>,
	pub row_focused: Option<StyleSpec>,
	pub row_selected: Option<StyleSpec>,
	pub empty: Option<StyleSpec>,
	pub hint: Option<StyleSpec>,
}

impl StyleOverrides {
	/// Return `theme` with every configured element patched.
	pub fn apply(&self, theme: Theme) -> Result<Theme> {
		Ok(Theme {
			border: patch(&self.border, theme.border, "border")?,
			border_focused: patch(&self.border_focused, theme.border_focused, "border_focused")?,
			chip: patch(&self.chip, theme.chip, "chip")?,
			prompt: patch(&self.prompt, theme.prompt, "prompt")?,
			placeholder: patch(&self.placeholder, theme.placeholder, "placeholder")?,
			row_focused: patch(&self.row_focused, theme.row_focused, "row_focused")?,
			row_selected: patch(&self.row_selected, theme.row_selected, "row_selected")?,
			empty: patch(&self.empty, theme.empty, "empty")?,
			hint: patch(&self.hint, theme.hint, "hint")?,
		})
	}
}

fn patch(spec: &Option<StyleSpec>, base: Style, element: &str) -> Result<Style> {
	match spec {
		Some(spec) => spec.patch(base, &format!("styles.{element}")),
		None => Ok(base),
	}
}

fn parse_color(input: &str) -> Result<Color> {
	let value = input.trim();

	if let Some(hex) = value.strip_prefix('#') {
		return parse_hex(hex);
	}

	if let Ok(index) = value.parse::<u8>() {
		return Ok(Color::Indexed(index));
	}

	Ok(match normalise_key(value).as_str() {
		"reset" | "none" | "default" => Color::Reset,
		"black" => Color::Black,
		"red" => Color::Red,
		"green" => Color::Green,
		"yellow" => Color::Yellow,
		"blue" => Color::Blue,
		"magenta" => Color::Magenta,
		"cyan" => Color::Cyan,
		"gray" | "grey" => Color::Gray,
		"dark_gray" | "dark_grey" => Color::DarkGray,
		"light_red" => Color::LightRed,
		"light_green" => Color::LightGreen,
		"light_yellow" => Color::LightYellow,
		"light_blue" => Color::LightBlue,
		"light_magenta" => Color::LightMagenta,
		"light_cyan" => Color::LightCyan,
		"white" => Color::White,
		other => bail!("unknown colour `{other}`"),
	})
}

fn parse_hex(hex: &str) -> Result<Color> {
	let digits: String = match hex.len() {
		3 => hex.chars().flat_map(|ch| [ch, ch]).collect(),
		6 => hex.to_string(),
		_ => bail!("hex colours must be 3 or 6 digits long"),
	};
	let channel = |range: std::ops::Range<usize>| {
		digits
			.get(range)
			.and_then(|pair| u8::from_str_radix(pair, 16).ok())
			.with_context(|| format!("invalid hex colour `#{hex}`"))
	};
	Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

fn parse_modifier(input: &str) -> Result<Modifier> {
	Ok(match normalise_key(input).as_str() {
		"bold" => Modifier::BOLD,
		"dim" => Modifier::DIM,
		"italic" => Modifier::ITALIC,
		"underline" | "underlined" => Modifier::UNDERLINED,
		"reversed" | "reverse" => Modifier::REVERSED,
		"crossed_out" | "strikethrough" => Modifier::CROSSED_OUT,
		other => bail!("unknown modifier `{other}`"),
	})
}

fn normalise_key(value: &str) -> String {
	value
		.trim()
		.to_ascii_lowercase()
		.chars()
		.map(|ch| if ch == '-' || ch == ' ' { '_' } else { ch })
		.collect()
}

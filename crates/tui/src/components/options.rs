//! Dropdown list of the options that match the filter text.

use msel_core::MultiSelect;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use super::scrollbar::{ScrollMetrics, render_scrollbar};
use crate::style::Theme;

const SELECTED_MARKER: &str = "✓ ";
const UNSELECTED_MARKER: &str = "  ";

/// Where the option rows ended up on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionsLayout {
	/// Area holding the rows, scrollbar excluded.
	pub rows: Rect,
	/// Visible row drawn on the first screen line.
	pub offset: usize,
}

impl OptionsLayout {
	/// Visible row under screen line `y`, if any.
	#[must_use]
	pub fn row_at(&self, x: u16, y: u16, len: usize) -> Option<usize> {
		if !self.rows.contains((x, y).into()) {
			return None;
		}
		let row = self.offset + usize::from(y - self.rows.y);
		(row < len).then_some(row)
	}
}

/// Number of screen lines the bordered list needs to show `visible` rows.
#[must_use]
pub fn options_height(visible: usize, max_rows: u16) -> u16 {
	let rows = u16::try_from(visible).unwrap_or(u16::MAX).clamp(1, max_rows.max(1));
	rows + 2
}

/// Draw the dropdown for `widget` into `area`.
///
/// The caller records the returned layout to map pointer events back to rows.
pub fn render_options(
	frame: &mut Frame,
	area: Rect,
	widget: &MultiSelect,
	empty: &str,
	theme: &Theme,
) -> OptionsLayout {
	let block = Block::default()
		.borders(Borders::ALL)
		.border_type(BorderType::Rounded)
		.border_style(theme.border_focused);
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let len = widget.visible_len();
	if len == 0 {
		let message = Paragraph::new(Span::styled(empty.to_string(), theme.empty))
			.alignment(Alignment::Center);
		frame.render_widget(message, inner);
		return OptionsLayout {
			rows: inner,
			offset: 0,
		};
	}

	let scroll = widget.scroll();
	let offset = scroll.offset();
	let metrics = ScrollMetrics::compute(len, usize::from(inner.height));
	let rows = render_scrollbar(frame, inner, metrics, offset, theme);

	for (line, row) in scroll.range(len).enumerate() {
		let Some(item) = widget.visible_item(row) else {
			break;
		};
		let Ok(line) = u16::try_from(line) else {
			break;
		};
		if line >= rows.height {
			break;
		}

		let selected = widget.is_selected(&item.id);
		let mut style = if selected {
			theme.row_selected
		} else {
			theme.prompt
		};
		if row == widget.focused_row() {
			style = style.patch(theme.row_focused);
		}

		let marker = if selected {
			SELECTED_MARKER
		} else {
			UNSELECTED_MARKER
		};
		let text = Line::from(vec![
			Span::raw(marker),
			Span::raw(item.title.clone()),
		]);
		let target = Rect {
			y: rows.y + line,
			height: 1,
			..rows
		};
		frame.render_widget(Paragraph::new(text).style(style), target);
	}

	OptionsLayout { rows, offset }
}

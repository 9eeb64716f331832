//! Scrollbar for the option list.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::style::Theme;

/// Precomputed scrolling metrics for the option list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollMetrics {
	/// Number of visible options.
	pub content_length: usize,
	/// Rows that fit in the viewport.
	pub viewport_len: usize,
	/// Largest valid scroll offset.
	pub max_scroll: usize,
	/// Whether the options overflow the viewport.
	pub needs_scrollbar: bool,
}

impl ScrollMetrics {
	/// Returns empty metrics if either value is zero.
	#[must_use]
	pub fn compute(content_length: usize, viewport_height: usize) -> Self {
		if content_length == 0 || viewport_height == 0 {
			return Self::default();
		}

		let viewport_len = viewport_height.min(content_length);
		let max_scroll = content_length.saturating_sub(viewport_len);

		Self {
			content_length,
			viewport_len,
			max_scroll,
			needs_scrollbar: content_length > viewport_len,
		}
	}

	/// Convert a scroll offset to the thumb position ratatui expects.
	#[must_use]
	pub fn scrollbar_position(&self, offset: usize) -> usize {
		if self.max_scroll == 0 || self.content_length == 0 {
			0
		} else {
			offset.min(self.max_scroll).saturating_mul(self.content_length.saturating_sub(1))
				/ self.max_scroll
		}
	}
}

/// Render a vertical scrollbar on the right edge of `area` when the list
/// overflows, returning the area left for the rows.
pub fn render_scrollbar(
	frame: &mut Frame,
	area: Rect,
	metrics: ScrollMetrics,
	offset: usize,
	theme: &Theme,
) -> Rect {
	if !metrics.needs_scrollbar || area.width < 2 {
		return area;
	}

	let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
		.begin_symbol(None)
		.end_symbol(None)
		.track_symbol(Some("│"))
		.style(theme.border);
	let mut state = ScrollbarState::new(metrics.content_length)
		.viewport_content_length(metrics.viewport_len)
		.position(metrics.scrollbar_position(offset));

	let bar = Rect {
		x: area.x + area.width - 1,
		width: 1,
		..area
	};
	frame.render_stateful_widget(scrollbar, bar, &mut state);

	Rect {
		width: area.width - 1,
		..area
	}
}

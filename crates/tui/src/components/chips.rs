//! Selected items drawn as removable chips inside the control.

use msel_core::Item;
use ratatui::layout::Rect;
use ratatui::text::Span;
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

use crate::style::Theme;

/// Glyph clicked to remove a single chip or, at the end of the control, all of them.
pub const CLOSE_GLYPH: &str = "×";

const MAX_TITLE_WIDTH: usize = 20;

/// Screen cells occupied by one rendered chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipHit {
	pub id: String,
	/// Whole chip, close glyph included.
	pub area: Rect,
	/// The close glyph alone.
	pub close: Rect,
}

/// Spans and hit areas for the chips that fit on one row.
#[derive(Debug, Clone, Default)]
pub struct ChipRow {
	pub spans: Vec<Span<'static>>,
	pub hits: Vec<ChipHit>,
	/// Columns used, trailing gap and overflow marker included.
	pub width: u16,
	/// Chips that did not fit and are summarised as `+N`.
	pub hidden: usize,
}

/// Lay out `chips` from the left of `area`, keeping `reserve` columns free
/// for the filter input.
#[must_use]
pub fn layout_chips(chips: &[&Item], area: Rect, reserve: u16, theme: &Theme) -> ChipRow {
	let budget = usize::from(area.width.saturating_sub(reserve));
	let mut row = ChipRow::default();
	let mut used = 0usize;

	for (index, item) in chips.iter().enumerate() {
		let label = chip_label(&item.title);
		let label_width = label.width();
		let chip_width = label_width + 4;
		if used + chip_width > budget {
			row.hidden = chips.len() - index;
			break;
		}

		let x = area.x + used as u16;
		row.hits.push(ChipHit {
			id: item.id.clone(),
			area: Rect::new(x, area.y, chip_width as u16, 1),
			close: Rect::new(x + label_width as u16 + 2, area.y, 1, 1),
		});
		row.spans.push(Span::styled(
			format!(" {label} {CLOSE_GLYPH} "),
			theme.chip,
		));
		row.spans.push(Span::raw(" "));
		used += chip_width + 1;
	}

	if row.hidden > 0 {
		let overflow = format!("+{} ", row.hidden);
		if used + overflow.width() <= usize::from(area.width) {
			used += overflow.width();
			row.spans.push(Span::styled(overflow, theme.empty));
		}
	}

	row.width = used.min(usize::from(area.width)) as u16;
	row
}

fn chip_label(title: &str) -> String {
	if title.width() <= MAX_TITLE_WIDTH {
		return title.to_string();
	}
	let (head, _) = title.unicode_truncate(MAX_TITLE_WIDTH - 1);
	format!("{head}…")
}

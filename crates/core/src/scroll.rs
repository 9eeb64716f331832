//! Scroll offset for a list of single-row entries.

/// Window of `viewport` rows starting at `offset` over a list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollWindow {
	offset: usize,
	viewport: usize,
}

impl ScrollWindow {
	#[must_use]
	pub fn new(viewport: usize) -> Self {
		Self {
			offset: 0,
			viewport,
		}
	}

	#[must_use]
	pub fn offset(&self) -> usize {
		self.offset
	}

	#[must_use]
	pub fn viewport(&self) -> usize {
		self.viewport
	}

	/// Update the number of rows the front end can show.
	pub fn set_viewport(&mut self, viewport: usize) {
		self.viewport = viewport;
	}

	pub fn scroll_to_top(&mut self) {
		self.offset = 0;
	}

	/// Move the window the minimum distance needed for `row` to be visible.
	///
	/// A row above the window becomes the first visible row; a row whose
	/// bottom edge falls below the window becomes the last visible row.
	pub fn ensure_visible(&mut self, row: usize) {
		let viewport = self.viewport.max(1);
		let top = row;
		let bottom = row + 1;
		if top < self.offset {
			self.offset = top;
		}
		if bottom > self.offset + viewport {
			self.offset = bottom - viewport;
		}
	}

	/// Scroll by `delta` rows, keeping the window inside `len` rows.
	pub fn scroll_by(&mut self, delta: isize, len: usize) {
		let max_offset = len.saturating_sub(self.viewport);
		self.offset = self.offset.saturating_add_signed(delta).min(max_offset);
	}

	/// Pull the offset back so the window does not run past `len` rows.
	pub fn clamp(&mut self, len: usize) {
		self.offset = self.offset.min(len.saturating_sub(self.viewport));
	}

	/// Visible row range for a list of `len` rows.
	#[must_use]
	pub fn range(&self, len: usize) -> std::ops::Range<usize> {
		let start = self.offset.min(len);
		let end = (self.offset + self.viewport).min(len);
		start..end
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rows_inside_window_do_not_scroll() {
		let mut window = ScrollWindow::new(3);
		window.ensure_visible(2);
		assert_eq!(window.offset(), 0);
	}

	#[test]
	fn row_below_window_becomes_last_visible() {
		let mut window = ScrollWindow::new(3);
		window.ensure_visible(3);
		assert_eq!(window.offset(), 1);
		assert_eq!(window.range(6), 1..4);
	}

	#[test]
	fn row_above_window_becomes_first_visible() {
		let mut window = ScrollWindow::new(3);
		window.ensure_visible(5);
		assert_eq!(window.offset(), 3);
		window.ensure_visible(1);
		assert_eq!(window.offset(), 1);
	}

	#[test]
	fn scroll_by_stays_in_bounds() {
		let mut window = ScrollWindow::new(4);
		window.scroll_by(10, 6);
		assert_eq!(window.offset(), 2);
		window.scroll_by(-5, 6);
		assert_eq!(window.offset(), 0);
	}

	#[test]
	fn clamp_follows_shrinking_lists() {
		let mut window = ScrollWindow::new(2);
		window.ensure_visible(5);
		window.clamp(3);
		assert_eq!(window.offset(), 1);
		assert_eq!(window.range(3), 1..3);
	}
}

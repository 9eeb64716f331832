//! Keyboard focus movement through the visible rows.

use std::time::{Duration, Instant};

use crate::scroll::ScrollWindow;

/// Minimum spacing between two accepted Up/Down steps.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(100);

/// Keys the navigator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
	Up,
	Down,
	Confirm,
}

/// What a key press did to the navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavStep {
	/// Focus moved to the contained row.
	Moved(usize),
	/// The focused row should be toggled.
	Confirm(usize),
	/// The key was recognized but changed nothing.
	Blocked,
}

/// Rate limiter driven by a monotonic clock.
#[derive(Debug, Clone, Copy)]
pub struct Debounce {
	interval: Duration,
	last: Option<Instant>,
}

impl Debounce {
	#[must_use]
	pub fn new(interval: Duration) -> Self {
		Self {
			interval,
			last: None,
		}
	}

	#[must_use]
	pub fn interval(&self) -> Duration {
		self.interval
	}

	/// Accept the event at `now` if the interval has passed since the last
	/// accepted one, recording `now` on success.
	pub fn accept(&mut self, now: Instant) -> bool {
		if let Some(last) = self.last
			&& now.saturating_duration_since(last) < self.interval
		{
			return false;
		}
		self.last = Some(now);
		true
	}
}

impl Default for Debounce {
	fn default() -> Self {
		Self::new(DEFAULT_DEBOUNCE)
	}
}

/// Focused row, scroll window and Up/Down debounce.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
	focused: usize,
	scroll: ScrollWindow,
	debounce: Debounce,
}

impl Navigator {
	#[must_use]
	pub fn new(debounce: Duration) -> Self {
		Self {
			debounce: Debounce::new(debounce),
			..Self::default()
		}
	}

	#[must_use]
	pub fn focused(&self) -> usize {
		self.focused
	}

	#[must_use]
	pub fn scroll(&self) -> &ScrollWindow {
		&self.scroll
	}

	pub fn scroll_mut(&mut self) -> &mut ScrollWindow {
		&mut self.scroll
	}

	#[must_use]
	pub fn debounce(&self) -> &Debounce {
		&self.debounce
	}

	/// Move focus back to the first row.
	pub fn reset(&mut self) {
		self.focused = 0;
	}

	/// Focus `row` directly, as when the pointer hovers it.
	pub fn focus(&mut self, row: usize, len: usize) -> bool {
		if row >= len || row == self.focused {
			return false;
		}
		self.focused = row;
		true
	}

	/// Apply `key` pressed at `now` to a list of `len` visible rows.
	pub fn press(&mut self, key: NavKey, now: Instant, len: usize) -> NavStep {
		match key {
			NavKey::Confirm if len > 0 => NavStep::Confirm(self.focused.min(len - 1)),
			NavKey::Confirm => NavStep::Blocked,
			NavKey::Up | NavKey::Down => {
				if !self.debounce.accept(now) {
					return NavStep::Blocked;
				}
				let target = match key {
					NavKey::Up if self.focused > 0 => self.focused - 1,
					NavKey::Down if self.focused + 1 < len => self.focused + 1,
					_ => return NavStep::Blocked,
				};
				self.focused = target;
				self.scroll.ensure_visible(target);
				NavStep::Moved(target)
			}
		}
	}
}

/// Default number of option rows shown before the list scrolls.
pub const DEFAULT_MAX_ROWS: u16 = 8;

/// Text rendered around the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	/// Title drawn on the control's border.
	pub title: String,
	/// Key hints shown on the bottom line.
	pub hint: String,
	/// Message shown in the dropdown when no item matches.
	pub empty: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			title: "Select".to_string(),
			hint: "↑/↓ move · Enter toggle · Ctrl+O open · Ctrl+S accept · Esc cancel"
				.to_string(),
			empty: "no data".to_string(),
		}
	}
}

impl UiLabels {
	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}
}

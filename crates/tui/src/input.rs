//! Single-line filter input backed by `tui-textarea`.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::TextArea;
use unicode_width::UnicodeWidthStr;

/// Editable filter text with cursor movement and word-wise deletion.
#[derive(Debug, Clone, Default)]
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
}

impl QueryInput<'_> {
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::default();
		textarea.insert_str(initial.into().replace(['\n', '\r'], " "));
		Self { textarea }
	}

	/// Current text on the single input line.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Apply an editing key. Returns `true` when the text changed.
	///
	/// Keys that would add a line are swallowed so the input stays on one row.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if inserts_line(&key) {
			return false;
		}
		self.textarea.input(key)
	}

	/// Display width of the text before the cursor.
	#[must_use]
	pub fn cursor_offset(&self) -> usize {
		let (_, column) = self.textarea.cursor();
		let before: String = self.text().chars().take(column).collect();
		before.width()
	}
}

fn inserts_line(key: &KeyEvent) -> bool {
	match key.code {
		KeyCode::Enter | KeyCode::Tab | KeyCode::BackTab => true,
		KeyCode::Char('m' | 'j') => key.modifiers.contains(KeyModifiers::CONTROL),
		_ => false,
	}
}

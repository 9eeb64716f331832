use std::time::Instant;

use log::debug;
use msel_core::NavKey;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

use super::App;
use crate::outcome::SelectOutcome;

const WHEEL_STEP: isize = 3;

impl App<'_> {
	/// Process a key pressed at `at` and return an outcome if the user exits.
	///
	/// Navigation keys reach the document first; only keys nobody consumed
	/// fall through to the picker's own bindings and the filter input.
	pub fn handle_key(&mut self, key: KeyEvent, at: Instant) -> Option<SelectOutcome> {
		self.mark_dirty();
		if let Some(nav) = nav_key(&key)
			&& self.document().dispatch_key(nav, at).is_consumed()
		{
			return None;
		}

		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Esc => return Some(self.outcome(false)),
			KeyCode::Char('c') if ctrl => return Some(self.outcome(false)),
			KeyCode::Char('s') if ctrl => return Some(self.outcome(true)),
			KeyCode::Char('o') if ctrl => self.with_widget_mut(|widget| widget.click_control()),
			_ => {
				if self.input.input(key) {
					let text = self.input.text().to_string();
					self.with_widget_mut(|widget| {
						widget.set_input(text);
						if !widget.is_open() {
							widget.click_control();
						}
					});
				}
			}
		}
		None
	}

	/// Route a mouse event to the document and the recorded hit areas.
	pub fn handle_mouse(&mut self, mouse: MouseEvent) {
		let position = Position::new(mouse.column, mouse.row);
		match mouse.kind {
			MouseEventKind::Down(MouseButton::Left) => self.press(position),
			MouseEventKind::Moved => {
				if let Some(row) = self.row_at(position) {
					self.with_widget_mut(|widget| widget.hover(row));
				}
			}
			MouseEventKind::ScrollUp if self.over_dropdown(position) => {
				self.with_widget_mut(|widget| widget.scroll_list(-WHEEL_STEP));
			}
			MouseEventKind::ScrollDown if self.over_dropdown(position) => {
				self.with_widget_mut(|widget| widget.scroll_list(WHEEL_STEP));
			}
			_ => {}
		}
	}

	fn press(&mut self, position: Position) {
		self.document().dispatch_pointer(position);

		if !self.hits.control.contains(position) {
			self.with_widget_mut(|widget| widget.blur());
		}
		if !self.hits.contains(position) {
			return;
		}

		if let Some(hit) = self.hits.chip_close_at(position) {
			let id = hit.id.clone();
			debug!("chip close clicked for {id}");
			self.with_widget_mut(|widget| widget.remove_chip(&id));
			return;
		}

		if self
			.hits
			.remove_all
			.is_some_and(|area| area.contains(position))
		{
			self.with_widget_mut(|widget| widget.remove_all());
			return;
		}

		if let Some(row) = self.row_at(position) {
			self.with_widget_mut(|widget| widget.toggle_row(row));
			return;
		}

		if self.hits.control.contains(position) {
			self.with_widget_mut(|widget| widget.click_control());
		}
	}

	fn row_at(&self, position: Position) -> Option<usize> {
		let widget = self.widget();
		if !widget.is_open() {
			return None;
		}
		self.hits
			.options
			.and_then(|layout| layout.row_at(position.x, position.y, widget.visible_len()))
	}

	fn over_dropdown(&self, position: Position) -> bool {
		self.widget().is_open()
			&& self
				.hits
				.dropdown
				.is_some_and(|dropdown| dropdown.contains(position))
	}
}

fn nav_key(key: &KeyEvent) -> Option<NavKey> {
	if key
		.modifiers
		.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
	{
		return None;
	}
	match key.code {
		KeyCode::Up => Some(NavKey::Up),
		KeyCode::Down => Some(NavKey::Down),
		KeyCode::Enter => Some(NavKey::Confirm),
		_ => None,
	}
}

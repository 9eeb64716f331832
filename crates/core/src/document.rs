//! Process-wide key and pointer listeners, and mounting widgets onto them.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Instant;

use log::{debug, warn};
use ratatui::layout::Position;

use crate::listeners::{Handled, ListenerGuard, ListenerSet};
use crate::navigator::NavKey;
use crate::outside::click_outside;
use crate::widget::MultiSelect;

/// A navigation key press, stamped with the monotonic time it arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyDown {
	pub key: NavKey,
	pub at: Instant,
}

/// A pointer press at a screen cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerDown {
	pub position: Position,
}

/// The shared event sources a front end dispatches into.
///
/// Cloning yields another handle onto the same listener sets.
#[derive(Debug, Clone, Default)]
pub struct Document {
	pub key_down: ListenerSet<KeyDown>,
	pub pointer_down: ListenerSet<PointerDown>,
}

impl Document {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	pub fn dispatch_key(&self, key: NavKey, at: Instant) -> Handled {
		self.key_down.dispatch(&KeyDown { key, at })
	}

	pub fn dispatch_pointer(&self, position: Position) -> Handled {
		self.pointer_down.dispatch(&PointerDown { position })
	}

	/// Number of listeners across both sources.
	#[must_use]
	pub fn listener_count(&self) -> usize {
		self.key_down.len() + self.pointer_down.len()
	}
}

/// Registrations held for a mounted widget. Dropping it unmounts.
#[derive(Debug)]
pub struct Mount {
	_keys: ListenerGuard<KeyDown>,
	_outside: ListenerGuard<PointerDown>,
}

impl Drop for Mount {
	fn drop(&mut self) {
		debug!("unmounting multi-select listeners");
	}
}

/// Attach `widget` to the key-down and pointer-down sources of `document`.
///
/// Key presses drive the keyboard navigator; pointer presses outside the
/// widget bounds close its dropdown. Listeners only hold a weak handle, so
/// they go quiet if the widget is dropped before the returned [`Mount`].
pub fn mount(widget: &Rc<RefCell<MultiSelect>>, document: &Document) -> Mount {
	let keys_target = Rc::downgrade(widget);
	let keys = document.key_down.register(move |event| {
		with_widget(&keys_target, |widget| widget.key_down(event.key, event.at))
	});

	let outside_target = Rc::downgrade(widget);
	let bounds = widget.borrow().bounds().clone();
	let outside = click_outside(&document.pointer_down, bounds, move |_| {
		with_widget(&outside_target, |widget| {
			widget.close();
			Handled::Ignored
		});
	});

	debug!("mounted multi-select listeners");
	Mount {
		_keys: keys,
		_outside: outside,
	}
}

fn with_widget<F>(target: &Weak<RefCell<MultiSelect>>, apply: F) -> Handled
where
	F: FnOnce(&mut MultiSelect) -> Handled,
{
	let Some(widget) = target.upgrade() else {
		return Handled::Ignored;
	};
	match widget.try_borrow_mut() {
		Ok(mut widget) => apply(&mut widget),
		Err(_) => {
			warn!("multi-select is busy; event dropped");
			Handled::Ignored
		}
	}
}

#[cfg(test)]
mod tests {
	use ratatui::layout::Rect;

	use super::*;
	use crate::item::Item;
	use crate::widget::MultiSelectProps;

	fn widget() -> Rc<RefCell<MultiSelect>> {
		let items = (1..=3)
			.map(|n| Item::new(n.to_string(), format!("title{n}")))
			.collect();
		Rc::new(RefCell::new(MultiSelect::new(MultiSelectProps::new(items))))
	}

	#[test]
	fn mount_registers_and_drop_releases() {
		let document = Document::new();
		let widget = widget();
		let mounted = mount(&widget, &document);
		assert_eq!(document.listener_count(), 2);
		drop(mounted);
		assert_eq!(document.listener_count(), 0);
	}

	#[test]
	fn two_instances_do_not_leak_into_each_other() {
		let document = Document::new();
		let first = widget();
		let second = widget();
		let first_mount = mount(&first, &document);
		let _second_mount = mount(&second, &document);
		first.borrow_mut().click_control();
		second.borrow_mut().click_control();

		drop(first_mount);
		document.dispatch_key(NavKey::Confirm, Instant::now());

		assert!(first.borrow().selection().is_empty());
		assert_eq!(second.borrow().selected_ids(), vec!["1".to_string()]);
		assert_eq!(document.listener_count(), 2);
	}

	#[test]
	fn keys_are_consumed_only_while_open() {
		let document = Document::new();
		let widget = widget();
		let _mounted = mount(&widget, &document);

		assert_eq!(document.dispatch_key(NavKey::Down, Instant::now()), Handled::Ignored);
		widget.borrow_mut().click_control();
		assert_eq!(document.dispatch_key(NavKey::Up, Instant::now()), Handled::Consumed);
	}

	#[test]
	fn outside_press_closes_the_dropdown() {
		let document = Document::new();
		let widget = widget();
		let _mounted = mount(&widget, &document);
		widget.borrow_mut().click_control();
		widget.borrow().bounds().set([Rect::new(0, 0, 20, 3), Rect::new(0, 3, 20, 5)]);

		document.dispatch_pointer(Position::new(5, 6));
		assert!(widget.borrow().is_open());
		document.dispatch_pointer(Position::new(30, 1));
		assert!(!widget.borrow().is_open());
	}

	#[test]
	fn outside_press_keeps_focus_and_selection() {
		let document = Document::new();
		let widget = widget();
		let _mounted = mount(&widget, &document);
		widget.borrow_mut().click_control();
		widget.borrow_mut().toggle("2");
		widget.borrow().bounds().set([Rect::new(0, 0, 20, 3)]);

		assert_eq!(document.dispatch_pointer(Position::new(1, 1)), Handled::Ignored);
		assert!(widget.borrow().is_open());
		document.dispatch_pointer(Position::new(1, 10));
		let widget = widget.borrow();
		assert!(!widget.is_open());
		assert!(widget.is_focused());
		assert_eq!(widget.selected_ids(), vec!["2".to_string()]);
	}

	#[test]
	fn listeners_go_quiet_once_the_widget_is_gone() {
		let document = Document::new();
		let widget = widget();
		let _mounted = mount(&widget, &document);
		drop(widget);
		assert_eq!(document.dispatch_key(NavKey::Confirm, Instant::now()), Handled::Ignored);
		assert_eq!(document.dispatch_pointer(Position::new(0, 0)), Handled::Ignored);
	}
}

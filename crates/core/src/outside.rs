//! Detect pointer presses that land outside a region.

use std::cell::RefCell;
use std::rc::Rc;

use ratatui::layout::{Position, Rect};

use crate::document::PointerDown;
use crate::listeners::{Handled, ListenerGuard, ListenerSet};

/// Screen region made of one or more rectangles, shared between the renderer
/// that measures it and the listeners that test against it.
#[derive(Debug, Clone, Default)]
pub struct Bounds {
	rects: Rc<RefCell<Vec<Rect>>>,
}

impl Bounds {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Replace the region with `rects`. Empty rectangles are ignored.
	pub fn set<I>(&self, rects: I)
	where
		I: IntoIterator<Item = Rect>,
	{
		let mut current = self.rects.borrow_mut();
		current.clear();
		current.extend(rects.into_iter().filter(|rect| !rect.is_empty()));
	}

	#[must_use]
	pub fn rects(&self) -> Vec<Rect> {
		self.rects.borrow().clone()
	}

	#[must_use]
	pub fn contains(&self, position: Position) -> bool {
		self.rects
			.borrow()
			.iter()
			.any(|rect| rect.contains(position))
	}

	/// True once the region has been measured and `position` is not in it.
	///
	/// An unmeasured region never reports outside presses, so a widget that
	/// has not been drawn yet is not closed by stray clicks.
	#[must_use]
	pub fn is_outside(&self, position: Position) -> bool {
		let rects = self.rects.borrow();
		!rects.is_empty() && !rects.iter().any(|rect| rect.contains(position))
	}
}

/// Call `on_outside` for every pointer press outside `bounds`.
///
/// The press is never consumed, so other listeners still see it.
pub fn click_outside<F>(
	pointer_down: &ListenerSet<PointerDown>,
	bounds: Bounds,
	mut on_outside: F,
) -> ListenerGuard<PointerDown>
where
	F: FnMut(&PointerDown) + 'static,
{
	pointer_down.register(move |event| {
		if bounds.is_outside(event.position) {
			on_outside(event);
		}
		Handled::Ignored
	})
}

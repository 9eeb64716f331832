//! Shared listener sets with scoped registration.
//!
//! A [`ListenerSet`] is a cheaply clonable handle to one list of callbacks.
//! Registering returns a [`ListenerGuard`]; dropping the guard removes the
//! callback again, whichever way the owner goes away. Callbacks may register
//! or release listeners on the same set while it is dispatching: new
//! listeners first see the next event, released ones are skipped for the rest
//! of the current one.

use std::cell::RefCell;
use std::fmt;
use std::mem;
use std::rc::{Rc, Weak};

use log::warn;

/// Whether a listener acted on an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Handled {
	/// The event was used; front ends should suppress their default action.
	Consumed,
	#[default]
	Ignored,
}

impl Handled {
	#[must_use]
	pub fn is_consumed(self) -> bool {
		self == Handled::Consumed
	}

	/// Combine two outcomes; consumed wins.
	#[must_use]
	pub fn or(self, other: Handled) -> Handled {
		if self.is_consumed() || other.is_consumed() {
			Handled::Consumed
		} else {
			Handled::Ignored
		}
	}
}

type Callback<E> = Box<dyn FnMut(&E) -> Handled>;

struct Registry<E> {
	next_id: u64,
	listeners: Vec<(u64, Callback<E>)>,
	dispatching: bool,
	parked: usize,
	released: Vec<u64>,
}

impl<E> Default for Registry<E> {
	fn default() -> Self {
		Self {
			next_id: 0,
			listeners: Vec::new(),
			dispatching: false,
			parked: 0,
			released: Vec::new(),
		}
	}
}

/// A list of callbacks for events of type `E`.
pub struct ListenerSet<E> {
	registry: Rc<RefCell<Registry<E>>>,
}

impl<E> Clone for ListenerSet<E> {
	fn clone(&self) -> Self {
		Self {
			registry: Rc::clone(&self.registry),
		}
	}
}

impl<E> Default for ListenerSet<E> {
	fn default() -> Self {
		Self {
			registry: Rc::new(RefCell::new(Registry::default())),
		}
	}
}

impl<E> fmt::Debug for ListenerSet<E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ListenerSet")
			.field("len", &self.len())
			.finish()
	}
}

impl<E: 'static> ListenerSet<E> {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Add `callback` until the returned guard is dropped.
	#[must_use = "dropping the guard removes the listener immediately"]
	pub fn register<F>(&self, callback: F) -> ListenerGuard<E>
	where
		F: FnMut(&E) -> Handled + 'static,
	{
		let mut registry = self.registry.borrow_mut();
		let id = registry.next_id;
		registry.next_id += 1;
		registry.listeners.push((id, Box::new(callback)));
		ListenerGuard {
			id,
			registry: Rc::downgrade(&self.registry),
		}
	}

	/// Like [`register`](Self::register) for observers that never consume.
	#[must_use = "dropping the guard removes the listener immediately"]
	pub fn subscribe<F>(&self, mut callback: F) -> ListenerGuard<E>
	where
		F: FnMut(&E) + 'static,
	{
		self.register(move |event| {
			callback(event);
			Handled::Ignored
		})
	}

	/// Call every registered listener with `event`, in registration order.
	///
	/// Dispatching the same set again from inside one of its listeners is not
	/// supported; the nested call is dropped and reports [`Handled::Ignored`].
	pub fn dispatch(&self, event: &E) -> Handled {
		let Some(mut parked) = Parked::take(&self.registry) else {
			warn!("nested dispatch on a listener set was dropped");
			return Handled::Ignored;
		};

		let mut handled = Handled::Ignored;
		for (id, callback) in parked.active.iter_mut() {
			if self.registry.borrow().released.contains(id) {
				continue;
			}
			handled = handled.or(callback(event));
		}
		handled
	}
}

impl<E> ListenerSet<E> {
	/// Number of live listeners.
	#[must_use]
	pub fn len(&self) -> usize {
		let registry = self.registry.borrow();
		registry.listeners.len() + registry.parked - registry.released.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

/// Listeners moved out of the registry for the duration of one dispatch.
///
/// Dropping it, including while unwinding out of a listener, merges them back
/// with whatever was registered meanwhile.
struct Parked<'a, E> {
	registry: &'a Rc<RefCell<Registry<E>>>,
	active: Vec<(u64, Callback<E>)>,
}

impl<'a, E> Parked<'a, E> {
	fn take(registry: &'a Rc<RefCell<Registry<E>>>) -> Option<Self> {
		let mut inner = registry.borrow_mut();
		if inner.dispatching {
			return None;
		}
		inner.dispatching = true;
		let active = mem::take(&mut inner.listeners);
		inner.parked = active.len();
		Some(Self { registry, active })
	}
}

impl<E> Drop for Parked<'_, E> {
	fn drop(&mut self) {
		let released_callbacks = {
			let mut inner = self.registry.borrow_mut();
			let added = mem::take(&mut inner.listeners);
			let released = mem::take(&mut inner.released);
			let (kept, dropped): (Vec<_>, Vec<_>) = mem::take(&mut self.active)
				.into_iter()
				.partition(|(id, _)| !released.contains(id));
			inner.listeners = kept;
			inner.listeners.extend(added);
			inner.parked = 0;
			inner.dispatching = false;
			dropped
		};
		// Callbacks may own guards for this same set; drop them unborrowed.
		drop(released_callbacks);
	}
}

/// Keeps one listener registered; removes it on drop.
#[must_use = "dropping the guard removes the listener immediately"]
pub struct ListenerGuard<E> {
	id: u64,
	registry: Weak<RefCell<Registry<E>>>,
}

impl<E> fmt::Debug for ListenerGuard<E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ListenerGuard")
			.field("id", &self.id)
			.field("live", &(self.registry.strong_count() > 0))
			.finish()
	}
}

impl<E> Drop for ListenerGuard<E> {
	fn drop(&mut self) {
		let Some(registry) = self.registry.upgrade() else {
			return;
		};
		let removed = {
			let mut inner = registry.borrow_mut();
			match inner.listeners.iter().position(|(id, _)| *id == self.id) {
				Some(position) => Some(inner.listeners.remove(position)),
				None => {
					if inner.dispatching {
						inner.released.push(self.id);
					}
					None
				}
			}
		};
		drop(removed);
	}
}

#[cfg(test)]
mod tests {
	use std::cell::{Cell, RefCell};
	use std::panic::{AssertUnwindSafe, catch_unwind};
	use std::rc::Rc;

	use super::*;

	#[test]
	fn dropping_the_guard_deregisters() {
		let set = ListenerSet::<u32>::new();
		let seen = Rc::new(Cell::new(0));
		let counter = Rc::clone(&seen);
		let guard = set.subscribe(move |value| counter.set(counter.get() + value));
		assert_eq!(set.len(), 1);

		set.dispatch(&2);
		drop(guard);
		set.dispatch(&5);

		assert_eq!(seen.get(), 2);
		assert!(set.is_empty());
	}

	#[test]
	fn consumed_by_any_listener_wins() {
		let set = ListenerSet::<()>::new();
		let _a = set.register(|_| Handled::Ignored);
		let _b = set.register(|_| Handled::Consumed);
		assert_eq!(set.dispatch(&()), Handled::Consumed);
	}

	#[test]
	fn listeners_run_in_registration_order() {
		let set = ListenerSet::<()>::new();
		let order = Rc::new(RefCell::new(Vec::new()));
		let first = Rc::clone(&order);
		let second = Rc::clone(&order);
		let _a = set.subscribe(move |_| first.borrow_mut().push("a"));
		let _b = set.subscribe(move |_| second.borrow_mut().push("b"));
		set.dispatch(&());
		assert_eq!(*order.borrow(), vec!["a", "b"]);
	}

	#[test]
	fn release_during_dispatch_skips_the_released_listener() {
		let set = ListenerSet::<()>::new();
		let calls = Rc::new(Cell::new(0));
		let slot: Rc<RefCell<Option<ListenerGuard<()>>>> = Rc::new(RefCell::new(None));

		let release = Rc::clone(&slot);
		let _first = set.subscribe(move |_| {
			release.borrow_mut().take();
		});
		let counter = Rc::clone(&calls);
		*slot.borrow_mut() = Some(set.subscribe(move |_| counter.set(counter.get() + 1)));

		set.dispatch(&());
		set.dispatch(&());

		assert_eq!(calls.get(), 0);
		assert_eq!(set.len(), 1);
	}

	#[test]
	fn registration_during_dispatch_waits_for_the_next_event() {
		let set = ListenerSet::<()>::new();
		let calls = Rc::new(Cell::new(0));
		let late: Rc<RefCell<Vec<ListenerGuard<()>>>> = Rc::new(RefCell::new(Vec::new()));

		let handle = set.clone();
		let counter = Rc::clone(&calls);
		let store = Rc::clone(&late);
		let _registrar = set.subscribe(move |_| {
			if store.borrow().is_empty() {
				let counter = Rc::clone(&counter);
				let guard = handle.subscribe(move |_| counter.set(counter.get() + 1));
				store.borrow_mut().push(guard);
			}
		});

		set.dispatch(&());
		assert_eq!(calls.get(), 0);
		assert_eq!(set.len(), 2);
		set.dispatch(&());
		assert_eq!(calls.get(), 1);
	}

	#[test]
	fn listeners_survive_a_panicking_listener() {
		let set = ListenerSet::<bool>::new();
		let calls = Rc::new(Cell::new(0));
		let _panicky = set.subscribe(|explode| {
			if *explode {
				panic!("listener failure");
			}
		});
		let counter = Rc::clone(&calls);
		let _counter = set.subscribe(move |_| counter.set(counter.get() + 1));

		let result = catch_unwind(AssertUnwindSafe(|| set.dispatch(&true)));
		assert!(result.is_err());
		assert_eq!(set.len(), 2);

		set.dispatch(&false);
		assert_eq!(calls.get(), 1);
	}

	#[test]
	fn guards_outliving_the_set_are_harmless() {
		let set = ListenerSet::<()>::new();
		let guard = set.subscribe(|_| {});
		drop(set);
		drop(guard);
	}
}

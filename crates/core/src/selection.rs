//! The set of chosen item identifiers.

use indexmap::IndexSet;

use crate::item::Item;

/// Result of flipping a single id in a [`SelectionSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
	Added,
	Removed,
}

/// When the widget reports selection changes to its owner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmitPolicy {
	/// Report after every toggle and after clearing.
	#[default]
	Always,
	/// Report only when a toggle removes an id (clearing still reports).
	DeselectOnly,
}

impl EmitPolicy {
	/// Whether a toggle with the given result should be reported.
	#[must_use]
	pub fn emits(self, toggled: Toggled) -> bool {
		match self {
			EmitPolicy::Always => true,
			EmitPolicy::DeselectOnly => toggled == Toggled::Removed,
		}
	}
}

/// Identifiers currently chosen, kept in the order they were chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
	ids: IndexSet<String>,
}

impl SelectionSet {
	/// Build the starting selection from `ids`, dropping anything that does
	/// not name one of `items`.
	#[must_use]
	pub fn initial<I, S>(ids: I, items: &[Item]) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let ids = ids
			.into_iter()
			.filter(|id| items.iter().any(|item| item.id == id.as_ref()))
			.map(|id| id.as_ref().to_owned())
			.collect();
		Self { ids }
	}

	/// Add `id` when absent, remove it when present.
	pub fn toggle(&mut self, id: &str) -> Toggled {
		if self.ids.shift_remove(id) {
			Toggled::Removed
		} else {
			self.ids.insert(id.to_owned());
			Toggled::Added
		}
	}

	/// Remove every id. Returns `false` when the set was already empty.
	pub fn clear(&mut self) -> bool {
		let had_any = !self.ids.is_empty();
		self.ids.clear();
		had_any
	}

	/// Drop ids that no longer name one of `items`. Returns whether anything
	/// was removed.
	pub fn retain_known(&mut self, items: &[Item]) -> bool {
		let before = self.ids.len();
		self.ids.retain(|id| items.iter().any(|item| &item.id == id));
		self.ids.len() != before
	}

	#[must_use]
	pub fn contains(&self, id: &str) -> bool {
		self.ids.contains(id)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.ids.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.ids.is_empty()
	}

	/// Selected ids in the order they were chosen.
	#[must_use]
	pub fn ids(&self) -> Vec<String> {
		self.ids.iter().cloned().collect()
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.ids.iter().map(String::as_str)
	}
}

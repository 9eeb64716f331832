//! Substring filtering of items by title.

use log::debug;

use crate::item::Item;

/// Return the items whose title contains `text`, in their original order.
///
/// Matching is a case-sensitive substring test. An empty `text` keeps every
/// item.
#[must_use]
pub fn filter<'a>(items: &'a [Item], text: &str) -> Vec<&'a Item> {
	if text.is_empty() {
		return items.iter().collect();
	}
	items.iter().filter(|item| item.title.contains(text)).collect()
}

/// Memoized projection of an item list through [`filter`].
///
/// Stores indices into the item list. The cached rows are reused until either
/// the items revision or the filter text changes.
#[derive(Debug, Clone, Default)]
pub struct VisibleList {
	indices: Vec<usize>,
	key: Option<(u64, String)>,
}

impl VisibleList {
	/// Recompute the rows for `items` and `text` unless they were already
	/// computed for the same `revision` and text. Returns `true` when the rows
	/// were rebuilt.
	pub fn refresh(&mut self, items: &[Item], revision: u64, text: &str) -> bool {
		if let Some((cached_revision, cached_text)) = &self.key
			&& *cached_revision == revision
			&& cached_text == text
		{
			return false;
		}

		self.indices = if text.is_empty() {
			(0..items.len()).collect()
		} else {
			items
				.iter()
				.enumerate()
				.filter(|(_, item)| item.title.contains(text))
				.map(|(index, _)| index)
				.collect()
		};
		self.key = Some((revision, text.to_owned()));
		debug!(
			"filter {text:?} kept {} of {} items",
			self.indices.len(),
			items.len()
		);
		true
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.indices.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.indices.is_empty()
	}

	/// Position of the `row`th visible item in the full item list.
	#[must_use]
	pub fn index(&self, row: usize) -> Option<usize> {
		self.indices.get(row).copied()
	}

	#[must_use]
	pub fn indices(&self) -> &[usize] {
		&self.indices
	}

	/// Resolve the cached rows against `items`.
	pub fn rows<'a>(&'a self, items: &'a [Item]) -> impl Iterator<Item = &'a Item> + 'a {
		self.indices.iter().filter_map(|&index| items.get(index))
	}
}

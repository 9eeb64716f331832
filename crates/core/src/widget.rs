//! The multi-select widget state machine.

use std::time::{Duration, Instant};

use log::debug;

use crate::filter::VisibleList;
use crate::item::Item;
use crate::listeners::{Handled, ListenerGuard, ListenerSet};
use crate::navigator::{NavKey, NavStep, Navigator};
use crate::outside::Bounds;
use crate::scroll::ScrollWindow;
use crate::selection::{EmitPolicy, SelectionSet, Toggled};

/// Placeholder shown in an empty control when none is configured.
pub const DEFAULT_PLACEHOLDER: &str = "Please select";

/// Construction parameters for a [`MultiSelect`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiSelectProps {
	/// Text shown in the input while nothing is selected.
	pub placeholder: String,
	/// Available options, in display order.
	pub items: Vec<Item>,
	/// Ids selected at start. Ids that match no item are dropped.
	pub value: Vec<String>,
}

impl Default for MultiSelectProps {
	fn default() -> Self {
		Self {
			placeholder: DEFAULT_PLACEHOLDER.to_string(),
			items: Vec::new(),
			value: Vec::new(),
		}
	}
}

impl MultiSelectProps {
	#[must_use]
	pub fn new(items: Vec<Item>) -> Self {
		Self {
			items,
			..Self::default()
		}
	}

	#[must_use]
	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = placeholder.into();
		self
	}

	#[must_use]
	pub fn with_value<I, S>(mut self, value: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.value = value.into_iter().map(Into::into).collect();
		self
	}
}

/// Notifications published by a [`MultiSelect`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
	/// The selection changed; carries every selected id in selection order.
	Selection(Vec<String>),
	/// Something visible changed and the widget should be redrawn.
	Refresh,
}

/// Selection, filtering and keyboard focus for one multi-select control.
///
/// Owners observe it through [`on_change`](Self::on_change) and
/// [`subscribe`](Self::subscribe). Subscribers run while the widget is being
/// mutated and must not call back into it.
pub struct MultiSelect {
	placeholder: String,
	items: Vec<Item>,
	revision: u64,
	selection: SelectionSet,
	input: String,
	visible: VisibleList,
	navigator: Navigator,
	open: bool,
	focused: bool,
	emit: EmitPolicy,
	bounds: Bounds,
	changes: ListenerSet<Change>,
	owned: Vec<ListenerGuard<Change>>,
}

impl std::fmt::Debug for MultiSelect {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("MultiSelect")
			.field("items", &self.items.len())
			.field("selection", &self.selection)
			.field("input", &self.input)
			.field("visible", &self.visible.len())
			.field("focused_row", &self.navigator.focused())
			.field("open", &self.open)
			.field("focused", &self.focused)
			.field("emit", &self.emit)
			.finish()
	}
}

impl MultiSelect {
	#[must_use]
	pub fn new(props: MultiSelectProps) -> Self {
		let MultiSelectProps {
			placeholder,
			items,
			value,
		} = props;
		let selection = SelectionSet::initial(&value, &items);
		if selection.len() != value.len() {
			debug!(
				"dropped {} initial ids that match no item",
				value.len() - selection.len()
			);
		}
		let mut visible = VisibleList::default();
		visible.refresh(&items, 0, "");
		Self {
			placeholder,
			items,
			revision: 0,
			selection,
			input: String::new(),
			visible,
			navigator: Navigator::default(),
			open: false,
			focused: false,
			emit: EmitPolicy::default(),
			bounds: Bounds::new(),
			changes: ListenerSet::new(),
			owned: Vec::new(),
		}
	}

	#[must_use]
	pub fn with_emit_policy(mut self, emit: EmitPolicy) -> Self {
		self.emit = emit;
		self
	}

	/// Change the minimum spacing between Up/Down steps.
	#[must_use]
	pub fn with_debounce(mut self, interval: Duration) -> Self {
		let viewport = self.navigator.scroll().viewport();
		self.navigator = Navigator::new(interval);
		self.navigator.scroll_mut().set_viewport(viewport);
		self
	}

	/// Number of list rows the front end shows at once.
	#[must_use]
	pub fn with_viewport(mut self, rows: usize) -> Self {
		self.set_viewport(rows);
		self
	}

	/// Attach an owner callback for the lifetime of the widget.
	#[must_use]
	pub fn with_on_change<F>(mut self, on_change: F) -> Self
	where
		F: FnMut(&[String]) + 'static,
	{
		let guard = self.on_change(on_change);
		self.owned.push(guard);
		self
	}

	/// Call `on_change` with the selected ids whenever the emit policy says
	/// the selection changed, until the guard is dropped.
	pub fn on_change<F>(&self, mut on_change: F) -> ListenerGuard<Change>
	where
		F: FnMut(&[String]) + 'static,
	{
		self.changes.subscribe(move |change| {
			if let Change::Selection(ids) = change {
				on_change(ids);
			}
		})
	}

	/// Observe every [`Change`] until the guard is dropped.
	pub fn subscribe<F>(&self, observer: F) -> ListenerGuard<Change>
	where
		F: FnMut(&Change) + 'static,
	{
		self.changes.subscribe(observer)
	}

	// Read access

	#[must_use]
	pub fn placeholder(&self) -> &str {
		&self.placeholder
	}

	/// Placeholder to display: empty once anything is selected.
	#[must_use]
	pub fn placeholder_text(&self) -> &str {
		if self.selection.is_empty() {
			&self.placeholder
		} else {
			""
		}
	}

	#[must_use]
	pub fn items(&self) -> &[Item] {
		&self.items
	}

	#[must_use]
	pub fn input(&self) -> &str {
		&self.input
	}

	#[must_use]
	pub fn selection(&self) -> &SelectionSet {
		&self.selection
	}

	#[must_use]
	pub fn selected_ids(&self) -> Vec<String> {
		self.selection.ids()
	}

	#[must_use]
	pub fn is_selected(&self, id: &str) -> bool {
		self.selection.contains(id)
	}

	/// Selected items in item order, as rendered in the chip row.
	pub fn chips(&self) -> impl Iterator<Item = &Item> {
		self.items
			.iter()
			.filter(|item| self.selection.contains(&item.id))
	}

	#[must_use]
	pub fn is_open(&self) -> bool {
		self.open
	}

	#[must_use]
	pub fn is_focused(&self) -> bool {
		self.focused
	}

	#[must_use]
	pub fn focused_row(&self) -> usize {
		self.navigator.focused()
	}

	#[must_use]
	pub fn visible_len(&self) -> usize {
		self.visible.len()
	}

	pub fn visible_items(&self) -> impl Iterator<Item = &Item> {
		self.visible.rows(&self.items)
	}

	#[must_use]
	pub fn visible_item(&self, row: usize) -> Option<&Item> {
		self.visible.index(row).and_then(|index| self.items.get(index))
	}

	#[must_use]
	pub fn scroll(&self) -> &ScrollWindow {
		self.navigator.scroll()
	}

	/// Region the front end measured for the control and its open list.
	#[must_use]
	pub fn bounds(&self) -> &Bounds {
		&self.bounds
	}

	#[must_use]
	pub fn emit_policy(&self) -> EmitPolicy {
		self.emit
	}

	#[must_use]
	pub fn debounce_interval(&self) -> Duration {
		self.navigator.debounce().interval()
	}

	// Selection

	/// Select `id` when absent, deselect it when present.
	pub fn toggle(&mut self, id: &str) -> Toggled {
		let toggled = self.selection.toggle(id);
		debug!("toggled {id:?}: {toggled:?}");
		if self.emit.emits(toggled) {
			self.emit_selection();
		}
		self.refresh();
		toggled
	}

	/// Remove a single chip. Returns `false` when `id` was not selected.
	pub fn remove_chip(&mut self, id: &str) -> bool {
		if !self.selection.contains(id) {
			return false;
		}
		self.toggle(id);
		true
	}

	/// Deselect everything and report the (empty) selection.
	pub fn remove_all(&mut self) {
		let cleared = self.selection.clear();
		debug!("removed all chips (changed: {cleared})");
		self.emit_selection();
		self.refresh();
	}

	/// Toggle the item shown at visible `row`.
	pub fn toggle_row(&mut self, row: usize) -> Option<Toggled> {
		let id = self.visible_item(row)?.id.clone();
		Some(self.toggle(&id))
	}

	// Filtering

	/// Replace the filter text. Focus returns to the first visible row.
	pub fn set_input(&mut self, text: impl Into<String>) {
		let text = text.into();
		if text == self.input {
			return;
		}
		self.input = text;
		self.visible.refresh(&self.items, self.revision, &self.input);
		self.reset_focus();
		self.refresh();
	}

	/// Replace the available items.
	///
	/// Selected ids that no longer match an item are dropped and reported.
	pub fn set_items(&mut self, items: Vec<Item>) {
		self.items = items;
		self.revision += 1;
		if self.selection.retain_known(&self.items) {
			self.emit_selection();
		}
		self.visible.refresh(&self.items, self.revision, &self.input);
		self.reset_focus();
		self.refresh();
	}

	// Dropdown

	/// Pointer click on the control surface: focus it and flip the dropdown.
	pub fn click_control(&mut self) {
		self.focused = true;
		if !self.open {
			self.reset_focus();
		}
		self.open = !self.open;
		debug!("dropdown {}", if self.open { "opened" } else { "closed" });
		self.refresh();
	}

	pub fn close(&mut self) {
		if self.open {
			self.open = false;
			debug!("dropdown closed");
			self.refresh();
		}
	}

	/// Focus left the control surface. The dropdown stays as it is.
	pub fn blur(&mut self) {
		if self.focused {
			self.focused = false;
			self.refresh();
		}
	}

	// Keyboard and pointer navigation

	/// Handle a navigation key pressed at `at`.
	///
	/// Ignored entirely while the dropdown is closed; consumed whenever it is
	/// open, even when the move is blocked.
	pub fn key_down(&mut self, key: NavKey, at: Instant) -> Handled {
		if !self.open {
			return Handled::Ignored;
		}
		match self.navigator.press(key, at, self.visible.len()) {
			NavStep::Confirm(row) => {
				self.toggle_row(row);
			}
			NavStep::Moved(_) => self.refresh(),
			NavStep::Blocked => {}
		}
		Handled::Consumed
	}

	/// Pointer hovering visible `row` focuses it.
	pub fn hover(&mut self, row: usize) {
		if self.navigator.focus(row, self.visible.len()) {
			self.refresh();
		}
	}

	/// Scroll the list without moving focus.
	pub fn scroll_list(&mut self, delta: isize) {
		let len = self.visible.len();
		self.navigator.scroll_mut().scroll_by(delta, len);
		self.refresh();
	}

	/// Record how many list rows fit on screen.
	pub fn set_viewport(&mut self, rows: usize) {
		let len = self.visible.len();
		let scroll = self.navigator.scroll_mut();
		scroll.set_viewport(rows);
		scroll.clamp(len);
	}

	fn reset_focus(&mut self) {
		self.navigator.reset();
		self.navigator.scroll_mut().scroll_to_top();
	}

	fn emit_selection(&self) {
		self.changes.dispatch(&Change::Selection(self.selection.ids()));
	}

	fn refresh(&self) {
		self.changes.dispatch(&Change::Refresh);
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;
	use std::rc::Rc;

	use super::*;

	fn story_items() -> Vec<Item> {
		(1..=6)
			.map(|n| Item::new(n.to_string(), format!("title{n}")))
			.collect()
	}

	fn ids(values: &[&str]) -> Vec<String> {
		values.iter().map(|value| value.to_string()).collect()
	}

	fn recorder(widget: &MultiSelect) -> (Rc<RefCell<Vec<Vec<String>>>>, ListenerGuard<Change>) {
		let emitted = Rc::new(RefCell::new(Vec::new()));
		let sink = Rc::clone(&emitted);
		let guard = widget.on_change(move |ids| sink.borrow_mut().push(ids.to_vec()));
		(emitted, guard)
	}

	fn open_widget(props: MultiSelectProps) -> MultiSelect {
		let mut widget = MultiSelect::new(props);
		widget.click_control();
		widget
	}

	#[test]
	fn default_placeholder_hides_once_something_is_selected() {
		let mut widget = MultiSelect::new(MultiSelectProps::new(story_items()));
		assert_eq!(widget.placeholder_text(), DEFAULT_PLACEHOLDER);
		widget.toggle("2");
		assert_eq!(widget.placeholder_text(), "");
	}

	#[test]
	fn initial_value_drops_unknown_ids() {
		let widget = MultiSelect::new(
			MultiSelectProps::new(story_items()).with_value(["9", "2", "nope"]),
		);
		assert_eq!(widget.selected_ids(), ids(&["2"]));
	}

	#[test]
	fn story_items_are_all_visible_with_focus_on_the_first() {
		let widget = MultiSelect::new(MultiSelectProps::new(story_items()));
		let titles: Vec<_> = widget.visible_items().map(|item| item.title.clone()).collect();
		assert_eq!(titles, ids(&["title1", "title2", "title3", "title4", "title5", "title6"]));
		assert_eq!(widget.focused_row(), 0);
	}

	#[test]
	fn typing_narrows_the_list_and_resets_focus() {
		let mut widget = open_widget(MultiSelectProps::new(story_items()));
		let start = Instant::now();
		widget.key_down(NavKey::Down, start);
		assert_eq!(widget.focused_row(), 1);

		widget.set_input("title3");
		assert_eq!(widget.visible_len(), 1);
		assert_eq!(widget.visible_item(0), Some(&Item::new("3", "title3")));
		assert_eq!(widget.focused_row(), 0);
	}

	#[test]
	fn rapid_down_presses_move_once() {
		let mut widget = open_widget(MultiSelectProps::new(story_items()));
		let start = Instant::now();
		for step in 0..5 {
			let handled = widget.key_down(NavKey::Down, start + Duration::from_millis(step * 15));
			assert_eq!(handled, Handled::Consumed);
		}
		assert_eq!(widget.focused_row(), 1);
	}

	#[test]
	fn keys_are_ignored_while_closed() {
		let mut widget = MultiSelect::new(MultiSelectProps::new(story_items()));
		assert_eq!(widget.key_down(NavKey::Down, Instant::now()), Handled::Ignored);
		assert_eq!(widget.key_down(NavKey::Confirm, Instant::now()), Handled::Ignored);
		assert_eq!(widget.focused_row(), 0);
		assert!(widget.selection().is_empty());
	}

	#[test]
	fn blocked_moves_are_still_consumed() {
		let mut widget = open_widget(MultiSelectProps::new(story_items()));
		assert_eq!(widget.key_down(NavKey::Up, Instant::now()), Handled::Consumed);
		assert_eq!(widget.focused_row(), 0);
	}

	#[test]
	fn confirm_on_selected_item_removes_it_and_reports_the_rest() {
		let mut widget =
			open_widget(MultiSelectProps::new(story_items()).with_value(["1", "4"]));
		let (emitted, _guard) = recorder(&widget);

		assert_eq!(widget.key_down(NavKey::Confirm, Instant::now()), Handled::Consumed);

		assert!(!widget.is_selected("1"));
		assert_eq!(*emitted.borrow(), vec![ids(&["4"])]);
		assert_eq!(widget.focused_row(), 0);
	}

	#[test]
	fn every_toggle_reports_by_default() {
		let mut widget = MultiSelect::new(MultiSelectProps::new(story_items()));
		let (emitted, _guard) = recorder(&widget);
		widget.toggle("2");
		widget.toggle("5");
		widget.toggle("2");
		assert_eq!(
			*emitted.borrow(),
			vec![ids(&["2"]), ids(&["2", "5"]), ids(&["5"])]
		);
	}

	#[test]
	fn deselect_only_policy_reports_removals() {
		let mut widget = MultiSelect::new(MultiSelectProps::new(story_items()))
			.with_emit_policy(EmitPolicy::DeselectOnly);
		let (emitted, _guard) = recorder(&widget);
		widget.toggle("2");
		widget.toggle("5");
		widget.toggle("2");
		assert_eq!(*emitted.borrow(), vec![ids(&["5"])]);
	}

	#[test]
	fn remove_all_clears_and_reports() {
		let mut widget =
			MultiSelect::new(MultiSelectProps::new(story_items()).with_value(["1", "2"]));
		let (emitted, _guard) = recorder(&widget);
		widget.remove_all();
		assert!(widget.selection().is_empty());
		assert_eq!(*emitted.borrow(), vec![Vec::<String>::new()]);
	}

	#[test]
	fn removing_a_chip_only_deselects() {
		let mut widget =
			MultiSelect::new(MultiSelectProps::new(story_items()).with_value(["3"]));
		assert!(!widget.remove_chip("1"));
		assert!(widget.remove_chip("3"));
		assert!(widget.selection().is_empty());
	}

	#[test]
	fn chips_follow_item_order() {
		let mut widget = MultiSelect::new(MultiSelectProps::new(story_items()));
		widget.toggle("5");
		widget.toggle("2");
		let chips: Vec<_> = widget.chips().map(|item| item.id.clone()).collect();
		assert_eq!(chips, ids(&["2", "5"]));
		assert_eq!(widget.selected_ids(), ids(&["5", "2"]));
	}

	#[test]
	fn opening_scrolls_to_top_and_refocuses_the_first_row() {
		let mut widget = MultiSelect::new(MultiSelectProps::new(story_items())).with_viewport(2);
		widget.click_control();
		let start = Instant::now();
		for step in 0..4 {
			widget.key_down(NavKey::Down, start + Duration::from_millis(step * 150));
		}
		assert_eq!(widget.focused_row(), 4);
		assert_eq!(widget.scroll().offset(), 3);

		widget.click_control();
		assert!(!widget.is_open());
		widget.click_control();
		assert!(widget.is_open());
		assert_eq!(widget.focused_row(), 0);
		assert_eq!(widget.scroll().offset(), 0);
	}

	#[test]
	fn blur_keeps_the_dropdown_open() {
		let mut widget = open_widget(MultiSelectProps::new(story_items()));
		widget.blur();
		assert!(widget.is_open());
		assert!(!widget.is_focused());

		widget.close();
		assert!(!widget.is_open());
	}

	#[test]
	fn hover_moves_focus_within_the_list() {
		let mut widget = open_widget(MultiSelectProps::new(story_items()));
		widget.hover(3);
		assert_eq!(widget.focused_row(), 3);
		widget.hover(99);
		assert_eq!(widget.focused_row(), 3);
	}

	#[test]
	fn replacing_items_prunes_the_selection() {
		let mut widget =
			MultiSelect::new(MultiSelectProps::new(story_items()).with_value(["1", "6"]));
		let (emitted, _guard) = recorder(&widget);
		widget.set_items(story_items().into_iter().take(3).collect());
		assert_eq!(widget.selected_ids(), ids(&["1"]));
		assert_eq!(*emitted.borrow(), vec![ids(&["1"])]);
		assert_eq!(widget.visible_len(), 3);
	}

	#[test]
	fn owned_callbacks_live_as_long_as_the_widget() {
		let seen = Rc::new(RefCell::new(Vec::new()));
		let sink = Rc::clone(&seen);
		let mut widget = MultiSelect::new(MultiSelectProps::new(story_items()))
			.with_on_change(move |ids| sink.borrow_mut().push(ids.to_vec()));
		widget.toggle("3");
		assert_eq!(*seen.borrow(), vec![ids(&["3"])]);
	}

	#[test]
	fn refresh_is_published_for_view_changes() {
		let mut widget = MultiSelect::new(MultiSelectProps::new(story_items()));
		let refreshes = Rc::new(RefCell::new(0));
		let counter = Rc::clone(&refreshes);
		let _guard = widget.subscribe(move |change| {
			if *change == Change::Refresh {
				*counter.borrow_mut() += 1;
			}
		});
		widget.click_control();
		widget.set_input("title");
		widget.set_input("title");
		assert_eq!(*refreshes.borrow(), 2);
	}
}

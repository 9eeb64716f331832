use std::time::{Duration, Instant};

use msel_core::{Item, MultiSelect, MultiSelectProps, NavKey, SelectionSet, filter};
use proptest::prelude::*;

fn items_strategy() -> impl Strategy<Value = Vec<Item>> {
	prop::collection::vec("[a-c]{0,4}", 0..12).prop_map(|titles| {
		titles
			.into_iter()
			.enumerate()
			.map(|(index, title)| Item::new(format!("id{index}"), title))
			.collect()
	})
}

proptest! {
	#[test]
	fn prop_initial_selection_only_keeps_known_ids(
		items in items_strategy(),
		value in prop::collection::vec("id[0-9]{1,2}", 0..10),
	) {
		let set = SelectionSet::initial(&value, &items);
		for id in set.iter() {
			prop_assert!(items.iter().any(|item| item.id == id));
		}
		for id in &value {
			let known = items.iter().any(|item| &item.id == id);
			prop_assert_eq!(set.contains(id), known);
		}
	}

	#[test]
	fn prop_filter_is_idempotent(items in items_strategy(), text in "[a-c]{0,2}") {
		let once: Vec<Item> = filter(&items, &text).into_iter().cloned().collect();
		let twice: Vec<Item> = filter(&once, &text).into_iter().cloned().collect();
		prop_assert_eq!(once, twice);
	}

	#[test]
	fn prop_empty_filter_is_identity(items in items_strategy()) {
		let visible: Vec<Item> = filter(&items, "").into_iter().cloned().collect();
		prop_assert_eq!(visible, items);
	}

	#[test]
	fn prop_filter_keeps_original_order(items in items_strategy(), text in "[a-c]{1,2}") {
		let positions: Vec<usize> = filter(&items, &text)
			.into_iter()
			.map(|kept| items.iter().position(|item| item.id == kept.id).unwrap())
			.collect();
		prop_assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
	}

	#[test]
	fn prop_double_toggle_restores_membership(
		items in items_strategy(),
		value in prop::collection::vec("id[0-9]", 0..6),
		target in "id[0-9]",
	) {
		let mut set = SelectionSet::initial(&value, &items);
		let before = set.clone();
		set.toggle(&target);
		set.toggle(&target);
		let mut after_ids = set.ids();
		let mut before_ids = before.ids();
		after_ids.sort();
		before_ids.sort();
		prop_assert_eq!(after_ids, before_ids);
	}

	#[test]
	fn prop_focus_resets_after_the_list_changes(
		items in items_strategy(),
		downs in 0usize..8,
		text in "[a-c]{0,2}",
	) {
		let mut widget = MultiSelect::new(MultiSelectProps::new(items));
		widget.click_control();
		let start = Instant::now();
		for step in 0..downs {
			widget.key_down(NavKey::Down, start + Duration::from_millis(step as u64 * 200));
		}
		widget.set_input(format!("{text}x"));
		prop_assert_eq!(widget.focused_row(), 0);
		widget.set_input(text);
		prop_assert_eq!(widget.focused_row(), 0);
	}

	#[test]
	fn prop_focus_stays_inside_the_visible_list(
		items in items_strategy(),
		keys in prop::collection::vec(prop_oneof![Just(NavKey::Up), Just(NavKey::Down)], 0..20),
	) {
		let mut widget = MultiSelect::new(MultiSelectProps::new(items));
		widget.click_control();
		let start = Instant::now();
		for (step, key) in keys.into_iter().enumerate() {
			widget.key_down(key, start + Duration::from_millis(step as u64 * 150));
			if widget.visible_len() > 0 {
				prop_assert!(widget.focused_row() < widget.visible_len());
			}
		}
	}
}

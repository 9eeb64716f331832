use serde::{Deserialize, Serialize};

/// A selectable option: a stable identifier plus the label shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
	pub id: String,
	pub title: String,
}

impl Item {
	#[must_use]
	pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			title: title.into(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn deserializes_from_json_objects() {
		let items: Vec<Item> =
			serde_json::from_str(r#"[{"id":"1","title":"title1"},{"id":"2","title":"title2"}]"#)
				.expect("items");
		assert_eq!(items, vec![Item::new("1", "title1"), Item::new("2", "title2")]);
	}
}

use serde::Serialize;

/// How a picker session ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOutcome {
	/// `false` when the user cancelled.
	pub accepted: bool,
	/// Filter text at the moment the picker closed.
	pub query: String,
	/// Selected ids in selection order.
	pub selected: Vec<String>,
}

impl SelectOutcome {
	#[must_use]
	pub fn accepted(selected: Vec<String>, query: impl Into<String>) -> Self {
		Self {
			accepted: true,
			query: query.into(),
			selected,
		}
	}

	#[must_use]
	pub fn cancelled(selected: Vec<String>, query: impl Into<String>) -> Self {
		Self {
			accepted: false,
			query: query.into(),
			selected,
		}
	}
}

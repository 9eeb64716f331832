use msel::EmitPolicy;
use serde::Deserialize;

use crate::cli::CliArgs;

/// `[picker]` values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct PickerSection {
	pub(super) placeholder: Option<String>,
	pub(super) title: Option<String>,
	pub(super) value: Option<Vec<String>>,
	pub(super) emit: Option<String>,
	pub(super) debounce_ms: Option<u64>,
	pub(super) max_rows: Option<u16>,
}

impl PickerSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(placeholder) = cli.placeholder.clone() {
			self.placeholder = Some(placeholder);
		}
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
		if let Some(value) = cli.value.clone() {
			self.value = Some(value);
		}
		if let Some(emit) = cli.emit {
			self.emit = Some(emit.as_str().to_string());
		}
		if let Some(debounce) = cli.debounce_ms {
			self.debounce_ms = Some(debounce);
		}
		if let Some(rows) = cli.max_rows {
			self.max_rows = Some(rows);
		}
	}
}

/// Parse an emit policy name; `-` and `_` are interchangeable.
pub(super) fn parse_emit(value: &str) -> Option<EmitPolicy> {
	match value.trim().to_ascii_lowercase().replace('_', "-").as_str() {
		"always" => Some(EmitPolicy::Always),
		"deselect-only" => Some(EmitPolicy::DeselectOnly),
		_ => None,
	}
}

/// Drop blank ids and surrounding whitespace.
pub(super) fn sanitize_value(values: Vec<String>) -> Vec<String> {
	values
		.into_iter()
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty())
		.collect()
}

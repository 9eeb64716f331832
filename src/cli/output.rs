use anyhow::Result;
use msel::SelectOutcome;

/// Print the selected ids, one per line.
pub(crate) fn print_plain(outcome: &SelectOutcome) {
	print!("{}", format_outcome_plain(outcome));
}

pub(crate) fn format_outcome_plain(outcome: &SelectOutcome) -> String {
	if !outcome.accepted {
		return "Selection cancelled\n".to_string();
	}

	outcome.selected.iter().map(|id| format!("{id}\n")).collect()
}

/// Format the outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SelectOutcome) -> Result<String> {
	Ok(serde_json::to_string_pretty(outcome)?)
}

/// Print the JSON representation of the outcome.
pub(crate) fn print_json(outcome: &SelectOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

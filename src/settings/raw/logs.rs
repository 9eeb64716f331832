use std::path::PathBuf;

use serde::Deserialize;

use crate::cli::CliArgs;

/// `[logging]` values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
	pub(super) level: Option<String>,
	pub(super) file: Option<PathBuf>,
}

impl LoggingSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(level) = cli.log_level.clone() {
			self.level = Some(level);
		}
		if let Some(file) = cli.log_file.clone() {
			self.file = Some(file);
		}
	}
}

use std::path::PathBuf;
use std::time::Duration;

use msel::{EmitPolicy, ItemSource, Theme};
use simplelog::LevelFilter;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub items: ItemSource,
	pub placeholder: String,
	pub title: String,
	/// Ids selected when the picker starts.
	pub value: Vec<String>,
	pub emit: EmitPolicy,
	pub debounce: Duration,
	pub max_rows: u16,
	pub theme_name: String,
	pub theme: Theme,
	pub log_level: LevelFilter,
	/// `None` when no log location could be determined.
	pub log_file: Option<PathBuf>,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		print!("{}", summary::summary(self));
	}
}

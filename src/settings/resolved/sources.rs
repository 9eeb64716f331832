use std::fmt;

#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each validated setting came from, for error messages.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) picker_emit: Option<SettingSource>,
	pub(crate) picker_max_rows: Option<SettingSource>,
	pub(crate) ui_theme: Option<SettingSource>,
	pub(crate) logging_level: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_emit(&self) -> SettingSource {
		self.picker_emit
			.clone()
			.unwrap_or(SettingSource::ConfigKey("picker.emit"))
	}

	pub(crate) fn source_for_max_rows(&self) -> SettingSource {
		self.picker_max_rows
			.clone()
			.unwrap_or(SettingSource::ConfigKey("picker.max_rows"))
	}

	pub(crate) fn source_for_theme(&self) -> SettingSource {
		self.ui_theme
			.clone()
			.unwrap_or(SettingSource::ConfigKey("ui.theme"))
	}

	pub(crate) fn source_for_log_level(&self) -> SettingSource {
		self.logging_level
			.clone()
			.unwrap_or(SettingSource::ConfigKey("logging.level"))
	}
}

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.max_rows == 0 {
		return Err(ConfigError::invalid(
			"picker.max_rows",
			config.max_rows,
			sources.source_for_max_rows(),
			"expected at least 1 row",
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use msel::{EmitPolicy, ItemSource};
	use simplelog::LevelFilter;

	use super::super::SettingSource;
	use super::*;

	fn config(max_rows: u16) -> ResolvedConfig {
		ResolvedConfig {
			items: ItemSource::Demo,
			placeholder: "Please select".into(),
			title: "Select".into(),
			value: Vec::new(),
			emit: EmitPolicy::Always,
			debounce: Duration::from_millis(100),
			max_rows,
			theme_name: "default".into(),
			theme: msel::Theme::default(),
			log_level: LevelFilter::Info,
			log_file: None,
		}
	}

	#[test]
	fn validation_rejects_zero_max_rows() {
		let sources = ConfigSources {
			picker_max_rows: Some(SettingSource::Environment("MSEL__PICKER__MAX_ROWS")),
			..ConfigSources::default()
		};

		let err = validate(&config(0), &sources).unwrap_err();
		assert!(matches!(err.key, "picker.max_rows"));
		let message = err.to_string();
		assert!(message.contains("cannot be `0`"));
		assert!(message.contains("environment variable"));
	}

	#[test]
	fn validation_accepts_defaults() {
		assert!(validate(&config(8), &ConfigSources::default()).is_ok());
	}
}

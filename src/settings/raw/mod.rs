use std::env;
use std::io::{self, IsTerminal};
use std::time::Duration;

use anyhow::{Context, Error, Result, bail};
use msel::{EmitPolicy, ItemSource, logging};
use msel_core::{DEFAULT_DEBOUNCE, DEFAULT_PLACEHOLDER};
use msel_tui::{DEFAULT_MAX_ROWS, style};
use serde::Deserialize;
use simplelog::LevelFilter;

use super::resolved::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};
use crate::cli::CliArgs;

mod logs;
mod picker;
mod ui;

use logs::LoggingSection;
use picker::{PickerSection, parse_emit, sanitize_value};
use ui::UiSection;

const DEFAULT_TITLE: &str = "Select";
const DEFAULT_THEME: &str = "default";

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	picker: PickerSection,
	ui: UiSection,
	logging: LoggingSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.picker.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
		self.logging.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			picker_emit: detect_source(
				cli.emit.is_some(),
				self.picker.emit.is_some(),
				"MSEL__PICKER__EMIT",
				"--emit",
				"picker.emit",
			),
			picker_max_rows: detect_source(
				cli.max_rows.is_some(),
				self.picker.max_rows.is_some(),
				"MSEL__PICKER__MAX_ROWS",
				"--max-rows",
				"picker.max_rows",
			),
			ui_theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"MSEL__UI__THEME",
				"--theme",
				"ui.theme",
			),
			logging_level: detect_source(
				cli.log_level.is_some(),
				self.logging.level.is_some(),
				"MSEL__LOGGING__LEVEL",
				"--log-level",
				"logging.level",
			),
		};

		let emit = match self.picker.emit.as_deref() {
			None => EmitPolicy::default(),
			Some(value) => parse_emit(value).ok_or_else(|| {
				ConfigError::invalid(
					"picker.emit",
					value,
					sources.source_for_emit(),
					"expected `always` or `deselect-only`",
				)
			})?,
		};

		let theme_name = self
			.ui
			.theme
			.clone()
			.unwrap_or_else(|| DEFAULT_THEME.to_string());
		let theme = style::by_name(&theme_name).ok_or_else(|| {
			ConfigError::invalid(
				"ui.theme",
				theme_name.as_str(),
				sources.source_for_theme(),
				format!("expected one of {}", style::names().join(", ")),
			)
		})?;
		let theme = self
			.ui
			.styles
			.apply(theme)
			.context("invalid style override")?;

		let log_level = match self.logging.level.as_deref() {
			None => LevelFilter::Info,
			Some(value) => logging::parse_level(value).map_err(|err| {
				ConfigError::invalid(
					"logging.level",
					value,
					sources.source_for_log_level(),
					err.to_string(),
				)
			})?,
		};
		let log_file = match self.logging.file {
			Some(file) => Some(file),
			None => logging::default_log_file().ok(),
		};

		let config = ResolvedConfig {
			items: item_source(cli)?,
			placeholder: self
				.picker
				.placeholder
				.unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string()),
			title: self
				.picker
				.title
				.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
			value: sanitize_value(self.picker.value.unwrap_or_default()),
			emit,
			debounce: self
				.picker
				.debounce_ms
				.map_or(DEFAULT_DEBOUNCE, Duration::from_millis),
			max_rows: self.picker.max_rows.unwrap_or(DEFAULT_MAX_ROWS),
			theme_name,
			theme,
			log_level,
			log_file,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn item_source(cli: &CliArgs) -> Result<ItemSource> {
	if cli.demo {
		return Ok(ItemSource::Demo);
	}
	if let Some(path) = &cli.items {
		return Ok(ItemSource::from_arg(path));
	}
	if !io::stdin().is_terminal() {
		return Ok(ItemSource::Stdin);
	}
	bail!("no items to pick from; pass --items FILE, --items - or --demo")
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

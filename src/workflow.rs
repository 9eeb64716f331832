use anyhow::{Context, Result};
use log::{debug, info};
use msel::{App, MultiSelect, MultiSelectProps, SelectOutcome, UiLabels};

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive picker.
pub(crate) struct PickerWorkflow {
	app: App<'static>,
}

impl PickerWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let items = config
			.items
			.load()
			.with_context(|| format!("failed to load items from {}", config.items))?;
		info!("starting picker with {} items", items.len());

		let app = PickerFactory::build(config, items);
		Ok(Self { app })
	}

	pub(crate) fn run(self) -> Result<SelectOutcome> {
		msel::run(self.app)
	}
}

/// Helper for translating resolved configuration into a configured [`App`].
struct PickerFactory;

impl PickerFactory {
	fn build(config: ResolvedConfig, items: Vec<msel::Item>) -> App<'static> {
		let ResolvedConfig {
			placeholder,
			title,
			value,
			emit,
			debounce,
			max_rows,
			theme,
			..
		} = config;

		let props = MultiSelectProps::new(items)
			.with_placeholder(placeholder)
			.with_value(value);
		let widget = MultiSelect::new(props)
			.with_emit_policy(emit)
			.with_debounce(debounce)
			.with_on_change(|ids| debug!("selection changed: {ids:?}"));

		App::new(widget)
			.with_labels(UiLabels::default().with_title(title))
			.with_theme(theme)
			.with_max_rows(max_rows)
	}
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use msel::{EmitPolicy, ItemSource, Theme, demo_items};
	use simplelog::LevelFilter;

	use super::*;

	#[test]
	fn factory_applies_picker_settings() {
		let config = ResolvedConfig {
			items: ItemSource::Demo,
			placeholder: "Pick".into(),
			title: "Fruit".into(),
			value: vec!["3".into(), "missing".into()],
			emit: EmitPolicy::DeselectOnly,
			debounce: Duration::from_millis(25),
			max_rows: 4,
			theme_name: "default".into(),
			theme: Theme::default(),
			log_level: LevelFilter::Off,
			log_file: None,
		};

		let app = PickerFactory::build(config, demo_items());
		let widget = app.widget();
		assert_eq!(widget.placeholder(), "Pick");
		assert_eq!(widget.selected_ids(), vec!["3"]);
		assert_eq!(widget.emit_policy(), EmitPolicy::DeselectOnly);
		assert_eq!(widget.debounce_interval(), Duration::from_millis(25));
		assert_eq!(widget.items().len(), 6);
	}
}

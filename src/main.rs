mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use log::info;
use settings::ResolvedConfig;
use workflow::PickerWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in msel_tui::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if let Some(path) = &resolved.log_file {
		msel::logging::initialize(resolved.log_level, path)?;
	}
	info!("msel {} starting", env!("CARGO_PKG_VERSION"));

	if cli.print_config {
		resolved.print_summary();
	}

	run_picker(cli.output, resolved)
}

/// Run the picker and print the outcome in the chosen format.
fn run_picker(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let workflow = PickerWorkflow::from_config(settings)?;
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}

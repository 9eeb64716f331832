use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{EmitArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `msel` binary.
#[derive(Parser, Debug)]
#[command(
	name = "msel",
	version,
	long_version = long_version(),
	about = "Pick several items from a list in the terminal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "MSEL_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'i',
		long,
		value_name = "FILE",
		conflicts_with = "demo",
		help = "Read items from FILE, or `-` for standard input (default: piped stdin)"
	)]
	pub(crate) items: Option<PathBuf>,
	#[arg(long, help = "Use the six built-in demo items (default: disabled)")]
	pub(crate) demo: bool,
	#[arg(
		short = 'v',
		long,
		value_delimiter = ',',
		value_name = "ID",
		help = "Comma-separated ids selected at start (default: none)"
	)]
	pub(crate) value: Option<Vec<String>>,
	#[arg(
		short = 'P',
		long,
		value_name = "TEXT",
		help = "Text shown while nothing is selected (default: \"Please select\")"
	)]
	pub(crate) placeholder: Option<String>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Title drawn on the control border (default: \"Select\")"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: default)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 'e',
		long,
		value_enum,
		help = "When to report selection changes (default: always)"
	)]
	pub(crate) emit: Option<EmitArg>,
	#[arg(
		long = "debounce-ms",
		value_name = "MS",
		help = "Minimum gap between accepted arrow key presses (default: 100)"
	)]
	pub(crate) debounce_ms: Option<u64>,
	#[arg(
		long = "max-rows",
		value_name = "NUM",
		help = "Options visible before the list scrolls (default: 8)"
	)]
	pub(crate) max_rows: Option<u16>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		help = "Log level: off, error, warn, info, debug or trace (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		help = "Write logs to FILE (default: msel.log in the cache directory)"
	)]
	pub(crate) log_file: Option<PathBuf>,
}

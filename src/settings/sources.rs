use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use msel::app_dirs;

use crate::cli::CliArgs;

/// Variables look like `MSEL__PICKER__MAX_ROWS`.
const ENV_PREFIX: &str = "msel";
const ENV_SEPARATOR: &str = "__";

/// Stack the file and environment layers for one run.
///
/// Later layers win: the per-user `config.toml`, then `./.msel.toml` and
/// `./msel.toml` (all optional and skipped with `--no-config`), then every
/// `--config` file in order (these must exist), then `env`.
pub(super) fn build_config(cli: &CliArgs, env: Environment) -> Result<Config> {
	let defaults = if cli.no_config {
		Vec::new()
	} else {
		default_config_files()
	};
	let optional = defaults
		.into_iter()
		.map(|path| File::from(path).required(false));
	let explicit = cli
		.config
		.iter()
		.map(|path| File::from(path.clone()).required(true));

	optional
		.chain(explicit)
		.fold(Config::builder(), |builder, file| builder.add_source(file))
		.add_source(env)
		.build()
		.context("failed to read msel configuration")
}

/// The `MSEL__SECTION__KEY` layer.
///
/// Scalars are parsed into numbers and booleans where they look like one, so
/// `MSEL__PICKER__DEBOUNCE_MS=50` fills a numeric field. `MSEL__PICKER__VALUE`
/// splits on commas into the initial id list.
pub(super) fn environment() -> Environment {
	Environment::with_prefix(ENV_PREFIX)
		.separator(ENV_SEPARATOR)
		.try_parsing(true)
		.list_separator(",")
		.with_list_parse_key("picker.value")
}

/// Optional config files, lowest precedence first.
fn default_config_files() -> Vec<PathBuf> {
	let user = app_dirs::get_config_dir()
		.ok()
		.map(|dir| dir.join("config.toml"));
	let local = env::current_dir()
		.ok()
		.into_iter()
		.flat_map(|dir| [dir.join(".msel.toml"), dir.join("msel.toml")]);

	user.into_iter().chain(local).collect()
}

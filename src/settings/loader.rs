use anyhow::{Context, Result};
use config::{Config, Environment};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::{build_config, environment};
use crate::cli::CliArgs;

/// Resolve the picker settings for this run from config files, `MSEL__*`
/// variables and CLI flags, in rising precedence.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	load_with_env(cli, environment())
}

/// [`load`] with an explicit environment layer.
pub(super) fn load_with_env(cli: &CliArgs, env: Environment) -> Result<ResolvedConfig> {
	let layered = build_config(cli, env)?;
	resolve(layered, cli)
}

fn resolve(layered: Config, cli: &CliArgs) -> Result<ResolvedConfig> {
	let mut raw: RawConfig = layered
		.try_deserialize()
		.context("configuration must only use the [picker], [ui] and [logging] tables")?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}

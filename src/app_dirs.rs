//! Where msel looks for its config file and writes its default log.
//!
//! `MSEL_CONFIG_DIR` and `MSEL_CACHE_DIR` override the platform locations
//! from `directories`; an empty value counts as unset.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

#[derive(Debug, Clone, Copy)]
enum AppDir {
	Config,
	Cache,
}

impl AppDir {
	fn env_var(self) -> &'static str {
		match self {
			Self::Config => "MSEL_CONFIG_DIR",
			Self::Cache => "MSEL_CACHE_DIR",
		}
	}

	fn platform(self, dirs: &ProjectDirs) -> PathBuf {
		let path: &Path = match self {
			Self::Config => dirs.config_local_dir(),
			Self::Cache => dirs.cache_dir(),
		};
		path.to_path_buf()
	}

	fn resolve(self) -> Result<PathBuf> {
		if let Some(dir) = non_empty(env::var_os(self.env_var())) {
			return Ok(dir);
		}
		let dirs = ProjectDirs::from("io", "albo", "msel")
			.ok_or_else(|| anyhow!("no home directory to place msel's {:?} directory in", self))?;
		Ok(self.platform(&dirs))
	}
}

fn non_empty(value: Option<std::ffi::OsString>) -> Option<PathBuf> {
	value.filter(|value| !value.is_empty()).map(PathBuf::from)
}

/// Directory holding the user's `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	AppDir::Config.resolve()
}

/// Directory for the default `msel.log`.
pub fn get_cache_dir() -> Result<PathBuf> {
	AppDir::Cache.resolve()
}

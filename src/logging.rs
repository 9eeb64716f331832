//! File logging for the picker.
//!
//! The terminal belongs to the TUI while it runs, so log records go to a file
//! through `simplelog`. Library crates only use the `log` macros.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::app_dirs;

const LOG_FILE_NAME: &str = "msel.log";

/// Parse a level name such as `info` or `off`, ignoring case.
pub fn parse_level(value: &str) -> Result<LevelFilter> {
	LevelFilter::from_str(value.trim()).map_err(|_| {
		anyhow!("unknown log level `{value}` (expected off, error, warn, info, debug or trace)")
	})
}

/// Log file used when none is configured.
pub fn default_log_file() -> Result<PathBuf> {
	Ok(app_dirs::get_cache_dir()?.join(LOG_FILE_NAME))
}

/// Install a logger appending to `path`. Does nothing for [`LevelFilter::Off`].
pub fn initialize(level: LevelFilter, path: &Path) -> Result<()> {
	if level == LevelFilter::Off {
		return Ok(());
	}

	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
	{
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	WriteLogger::init(level, Config::default(), file).context("failed to install logger")?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn levels_parse_case_insensitively() {
		assert_eq!(parse_level("DEBUG").unwrap(), LevelFilter::Debug);
		assert_eq!(parse_level(" off ").unwrap(), LevelFilter::Off);
		assert!(parse_level("loud").is_err());
	}

	#[test]
	fn off_level_touches_nothing() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("nested").join("msel.log");
		initialize(LevelFilter::Off, &path).expect("no-op");
		assert!(!path.exists());
	}

	#[test]
	fn default_log_file_is_named_after_the_binary() {
		let path = default_log_file().expect("cache dir");
		assert!(path.ends_with(LOG_FILE_NAME));
	}
}

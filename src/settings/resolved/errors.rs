use std::fmt::Display;

use thiserror::Error;

use super::SettingSource;

/// A setting that parsed but holds a value msel cannot use.
#[derive(Debug, Error)]
#[error("`{key}` from {origin} cannot be `{value}`: {expected}")]
pub(crate) struct ConfigError {
	pub(crate) key: &'static str,
	pub(crate) value: String,
	pub(crate) origin: SettingSource,
	pub(crate) expected: String,
}

impl ConfigError {
	pub(crate) fn invalid(
		key: &'static str,
		value: impl Display,
		origin: SettingSource,
		expected: impl Into<String>,
	) -> Self {
		Self {
			key,
			value: value.to_string(),
			origin,
			expected: expected.into(),
		}
	}
}

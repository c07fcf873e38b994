use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Delimiter used to join value names into canonical keys when none is configured.
pub const DEFAULT_DELIMITER: &str = ";";

/// Runtime configuration shared by the index builder and the CLI.
///
/// ```toml
/// delimiter = "|"
/// log_collisions = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PickerConfig {
	/// Separator placed between value names in a canonical key.
	pub delimiter: String,
	/// Emit a warning for every variant whose full key an earlier variant already claimed.
	pub log_collisions: bool,
}

impl Default for PickerConfig {
	fn default() -> Self {
		Self {
			delimiter: DEFAULT_DELIMITER.to_string(),
			log_collisions: true,
		}
	}
}

impl PickerConfig {
	pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(s)?;
		config.check()?;
		Ok(config)
	}

	pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_toml_str(&content)
	}

	fn check(&self) -> Result<(), ConfigError> {
		if self.delimiter.is_empty() {
			return Err(ConfigError::EmptyDelimiter);
		}
		Ok(())
	}
}

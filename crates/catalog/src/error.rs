use std::path::PathBuf;

/// Failure to load a catalog document.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
	#[error("failed to read catalog {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("invalid JSON catalog: {0}")]
	Json(#[from] serde_json::Error),

	#[error("invalid TOML catalog: {0}")]
	Toml(#[from] toml::de::Error),
}

/// Failure to load or accept a [`crate::PickerConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("failed to read config {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("invalid config: {0}")]
	Parse(#[from] toml::de::Error),

	#[error("key delimiter must not be empty")]
	EmptyDelimiter,
}

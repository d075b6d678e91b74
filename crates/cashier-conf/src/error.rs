//! Settings errors

/// Error raised while loading provider settings
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	/// Required environment variable is unset
	#[error("Missing environment variable: {0}")]
	MissingVariable(String),

	/// Environment variable holds a non-unicode value
	#[error("Environment variable is not valid unicode: {0}")]
	InvalidVariable(String),

	/// Required key is absent from the `[payment]` table
	#[error("Missing setting: {0}")]
	MissingField(String),

	/// Provider selector names no supported provider
	#[error("Unknown payment provider: {0}")]
	UnknownProvider(String),

	/// Settings file could not be read
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	/// Settings file is not valid TOML or lacks a `[payment]` table
	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),
}

//! Environment variable settings source
//!
//! Reads the provider selector and credentials from prefixed environment
//! variables.

use secrecy::SecretString;
use std::env;

use crate::error::SettingsError;
use crate::kind::ProviderKind;
use crate::settings::ProviderSettings;

/// Prefix used when none is configured
pub const DEFAULT_PREFIX: &str = "CASHIER_";

const PROVIDER: &str = "PROVIDER";
const STRIPE_API_KEY: &str = "STRIPE_API_KEY";
const PAYPAL_CLIENT_ID: &str = "PAYPAL_CLIENT_ID";
const PAYPAL_CLIENT_SECRET: &str = "PAYPAL_CLIENT_SECRET";

/// Loads [`ProviderSettings`] from environment variables
///
/// With the default prefix the loader reads `CASHIER_PROVIDER` and then the
/// credentials of the selected provider only.
#[derive(Debug, Clone)]
pub struct EnvSettingsLoader {
	prefix: String,
}

impl EnvSettingsLoader {
	/// Create a loader using [`DEFAULT_PREFIX`]
	pub fn new() -> Self {
		Self {
			prefix: DEFAULT_PREFIX.to_string(),
		}
	}

	/// Set the prefix for all variable lookups
	///
	/// # Examples
	///
	/// ```
	/// use cashier_conf::EnvSettingsLoader;
	///
	/// let loader = EnvSettingsLoader::new().with_prefix("BILLING_");
	/// assert_eq!(loader.prefix(), "BILLING_");
	/// ```
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = prefix.into();
		self
	}

	/// Get the configured prefix
	pub fn prefix(&self) -> &str {
		&self.prefix
	}

	fn key_name(&self, key: &str) -> String {
		format!("{}{}", self.prefix, key)
	}

	fn var(&self, key: &str) -> Result<String, SettingsError> {
		let full_key = self.key_name(key);
		env::var(&full_key).map_err(|e| match e {
			env::VarError::NotPresent => SettingsError::MissingVariable(full_key),
			env::VarError::NotUnicode(_) => SettingsError::InvalidVariable(full_key),
		})
	}

	fn secret(&self, key: &str) -> Result<SecretString, SettingsError> {
		self.var(key).map(SecretString::from)
	}

	/// Load provider settings from the environment
	///
	/// # Errors
	///
	/// Returns [`SettingsError::MissingVariable`] if the selector or a
	/// credential of the selected provider is unset,
	/// [`SettingsError::InvalidVariable`] if one of them is not valid unicode,
	/// and [`SettingsError::UnknownProvider`] if the selector names no known
	/// provider.
	pub fn load(&self) -> Result<ProviderSettings, SettingsError> {
		let kind: ProviderKind = self.var(PROVIDER)?.parse()?;

		let settings = match kind {
			ProviderKind::Stripe => ProviderSettings::Stripe {
				api_key: self.secret(STRIPE_API_KEY)?,
			},
			ProviderKind::PayPal => ProviderSettings::PayPal {
				client_id: self.secret(PAYPAL_CLIENT_ID)?,
				client_secret: self.secret(PAYPAL_CLIENT_SECRET)?,
			},
		};

		tracing::debug!(provider = %kind, prefix = %self.prefix, "loaded payment settings from environment");
		Ok(settings)
	}
}

impl Default for EnvSettingsLoader {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_default_prefix() {
		let loader = EnvSettingsLoader::default();
		assert_eq!(loader.prefix(), "CASHIER_");
		assert_eq!(loader.key_name(PROVIDER), "CASHIER_PROVIDER");
	}

	#[rstest]
	fn test_custom_prefix_applies_to_every_key() {
		let loader = EnvSettingsLoader::new().with_prefix("APP_");
		assert_eq!(loader.key_name(STRIPE_API_KEY), "APP_STRIPE_API_KEY");
		assert_eq!(loader.key_name(PAYPAL_CLIENT_SECRET), "APP_PAYPAL_CLIENT_SECRET");
	}

	#[rstest]
	fn test_missing_selector_reports_full_variable_name() {
		let loader = EnvSettingsLoader::new().with_prefix("CASHIER_UNIT_UNSET_");

		let err = loader.load().unwrap_err();
		assert!(
			matches!(err, SettingsError::MissingVariable(ref key) if key == "CASHIER_UNIT_UNSET_PROVIDER")
		);
	}
}

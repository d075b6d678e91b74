//! Provider settings and provider factory

use cashier_payment::{PayPalProvider, PaymentProvider, StripeProvider};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::env::EnvSettingsLoader;
use crate::error::SettingsError;
use crate::kind::ProviderKind;

/// Credentials for exactly one payment provider
///
/// `Debug` output never includes credential values.
#[derive(Debug)]
pub enum ProviderSettings {
	/// Stripe settings
	Stripe {
		/// Secret API key
		api_key: SecretString,
	},
	/// PayPal settings
	PayPal {
		/// OAuth client id
		client_id: SecretString,
		/// OAuth client secret
		client_secret: SecretString,
	},
}

/// `[payment]` table as written in a settings file
#[derive(Debug, Deserialize)]
struct PaymentTable {
	provider: String,
	api_key: Option<String>,
	client_id: Option<String>,
	client_secret: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SettingsFile {
	payment: PaymentTable,
}

fn required(value: Option<String>, field: &str) -> Result<SecretString, SettingsError> {
	value
		.map(SecretString::from)
		.ok_or_else(|| SettingsError::MissingField(format!("payment.{}", field)))
}

impl ProviderSettings {
	/// Stripe settings from an API key
	pub fn stripe(api_key: impl Into<String>) -> Self {
		Self::Stripe {
			api_key: SecretString::from(api_key.into()),
		}
	}

	/// PayPal settings from a client id and secret
	pub fn paypal(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
		Self::PayPal {
			client_id: SecretString::from(client_id.into()),
			client_secret: SecretString::from(client_secret.into()),
		}
	}

	/// Provider these settings select
	pub fn kind(&self) -> ProviderKind {
		match self {
			Self::Stripe { .. } => ProviderKind::Stripe,
			Self::PayPal { .. } => ProviderKind::PayPal,
		}
	}

	/// Parse settings from the `[payment]` table of a TOML document
	///
	/// Only the credentials of the selected provider are required; keys
	/// belonging to other providers are ignored.
	pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
		let file: SettingsFile = toml::from_str(content)?;
		let table = file.payment;
		let kind: ProviderKind = table.provider.parse()?;

		let settings = match kind {
			ProviderKind::Stripe => Self::Stripe {
				api_key: required(table.api_key, "api_key")?,
			},
			ProviderKind::PayPal => Self::PayPal {
				client_id: required(table.client_id, "client_id")?,
				client_secret: required(table.client_secret, "client_secret")?,
			},
		};

		tracing::debug!(provider = %kind, "loaded payment settings from TOML");
		Ok(settings)
	}

	/// Read and parse a TOML settings file
	pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		let content = fs::read_to_string(path.as_ref())?;
		Self::from_toml_str(&content)
	}

	/// Load settings from `CASHIER_*` environment variables
	pub fn from_env() -> Result<Self, SettingsError> {
		EnvSettingsLoader::new().load()
	}

	/// Construct the configured provider
	pub fn build(&self) -> Arc<dyn PaymentProvider> {
		match self {
			Self::Stripe { api_key } => Arc::new(StripeProvider::new(api_key.expose_secret())),
			Self::PayPal {
				client_id,
				client_secret,
			} => Arc::new(PayPalProvider::new(
				client_id.expose_secret(),
				client_secret.expose_secret(),
			)),
		}
	}
}

/// Construct the provider selected by `settings`
pub fn build_provider(settings: &ProviderSettings) -> Arc<dyn PaymentProvider> {
	settings.build()
}

//! Provider selector

use std::fmt;
use std::str::FromStr;

use crate::error::SettingsError;

/// Supported payment providers
///
/// Parsed case-insensitively from settings files and the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
	/// Stripe (API key)
	Stripe,
	/// PayPal (client id + client secret)
	PayPal,
}

impl ProviderKind {
	/// Returns the lowercase provider name
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Stripe => "stripe",
			Self::PayPal => "paypal",
		}
	}
}

impl fmt::Display for ProviderKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for ProviderKind {
	type Err = SettingsError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().as_str() {
			"stripe" => Ok(Self::Stripe),
			"paypal" => Ok(Self::PayPal),
			_ => Err(SettingsError::UnknownProvider(s.to_string())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("stripe", ProviderKind::Stripe)]
	#[case("Stripe", ProviderKind::Stripe)]
	#[case(" STRIPE ", ProviderKind::Stripe)]
	#[case("paypal", ProviderKind::PayPal)]
	#[case("PayPal", ProviderKind::PayPal)]
	fn test_parse_provider_kind(#[case] input: &str, #[case] expected: ProviderKind) {
		assert_eq!(input.parse::<ProviderKind>().unwrap(), expected);
	}

	#[rstest]
	#[case("")]
	#[case("braintree")]
	#[case("pay pal")]
	fn test_parse_unknown_provider(#[case] input: &str) {
		let err = input.parse::<ProviderKind>().unwrap_err();
		assert!(matches!(err, SettingsError::UnknownProvider(name) if name == input));
	}

	#[rstest]
	fn test_display_round_trips_through_from_str() {
		for kind in [ProviderKind::Stripe, ProviderKind::PayPal] {
			assert_eq!(kind.to_string().parse::<ProviderKind>().unwrap(), kind);
		}
	}
}

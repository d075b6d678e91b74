//! Stripe payment provider.

use async_trait::async_trait;
use secrecy::SecretString;
use uuid::Uuid;

use crate::provider::PaymentProvider;
use crate::types::{PaymentError, PaymentResult, Subscription};

/// Provider name reported by [`StripeProvider`].
pub const PROVIDER_NAME: &str = "stripe";

/// Status of a successful Stripe charge.
pub const CHARGE_STATUS: &str = "succeeded";

/// Status of a newly created Stripe subscription.
pub const SUBSCRIPTION_STATUS: &str = "active";

/// Stripe payment provider.
///
/// Rejects non-positive charge amounts and supports subscriptions.
/// No request leaves the process; identifiers are generated locally with
/// Stripe's `ch_` and `sub_` prefixes.
#[derive(Debug)]
pub struct StripeProvider {
	/// Secret key for API requests
	_api_key: SecretString,
}

impl StripeProvider {
	/// Creates a new Stripe provider.
	///
	/// # Arguments
	///
	/// * `api_key` - Stripe secret key, stored as-is
	pub fn new(api_key: impl Into<String>) -> Self {
		Self {
			_api_key: SecretString::from(api_key.into()),
		}
	}

	#[cfg(test)]
	pub(crate) fn api_key(&self) -> &SecretString {
		&self._api_key
	}
}

#[async_trait]
impl PaymentProvider for StripeProvider {
	fn name(&self) -> &'static str {
		PROVIDER_NAME
	}

	async fn charge(
		&self,
		amount: i64,
		currency: &str,
		_source: &str,
	) -> Result<PaymentResult, PaymentError> {
		if amount <= 0 {
			tracing::debug!(provider = PROVIDER_NAME, amount, "rejected non-positive charge amount");
			return Err(PaymentError::InvalidAmount(amount));
		}

		let result = PaymentResult {
			id: format!("ch_{}", Uuid::new_v4().simple()),
			amount,
			currency: currency.to_string(),
			status: CHARGE_STATUS.to_string(),
		};

		tracing::debug!(
			provider = PROVIDER_NAME,
			charge_id = %result.id,
			amount,
			currency,
			"charge succeeded"
		);
		Ok(result)
	}

	async fn refund(&self, charge_id: &str, amount: i64) -> Result<(), PaymentError> {
		tracing::debug!(provider = PROVIDER_NAME, charge_id, amount, "refund succeeded");
		Ok(())
	}

	async fn create_subscription(
		&self,
		customer_id: &str,
		plan_id: &str,
	) -> Result<Subscription, PaymentError> {
		let subscription = Subscription {
			id: format!("sub_{}", Uuid::new_v4().simple()),
			customer_id: customer_id.to_string(),
			plan_id: plan_id.to_string(),
			status: SUBSCRIPTION_STATUS.to_string(),
		};

		tracing::debug!(
			provider = PROVIDER_NAME,
			subscription_id = %subscription.id,
			"subscription created"
		);
		Ok(subscription)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};
	use secrecy::ExposeSecret;

	#[fixture]
	fn provider() -> StripeProvider {
		StripeProvider::new("sk_test_123")
	}

	#[rstest]
	fn test_new_stores_api_key() {
		let provider = StripeProvider::new("sk_test_123");
		assert_eq!(provider.api_key().expose_secret(), "sk_test_123");
	}

	#[rstest]
	fn test_debug_redacts_api_key(provider: StripeProvider) {
		let debug = format!("{:?}", provider);
		assert!(!debug.contains("sk_test_123"));
	}

	#[rstest]
	#[tokio::test]
	async fn test_charge_succeeds_for_valid_amount(provider: StripeProvider) {
		let result = provider.charge(1000, "usd", "tok_visa").await.unwrap();

		assert_eq!(result.amount, 1000);
		assert_eq!(result.currency, "usd");
		assert_eq!(result.status, "succeeded");
		assert!(result.id.starts_with("ch_"));
	}

	#[rstest]
	#[case(0)]
	#[case(-100)]
	#[case(i64::MIN)]
	#[tokio::test]
	async fn test_charge_rejects_non_positive_amount(provider: StripeProvider, #[case] amount: i64) {
		let err = provider.charge(amount, "usd", "tok_visa").await.unwrap_err();
		assert_eq!(err, PaymentError::InvalidAmount(amount));
	}

	#[rstest]
	#[tokio::test]
	async fn test_charge_ids_are_unique(provider: StripeProvider) {
		let first = provider.charge(1, "usd", "tok_visa").await.unwrap();
		let second = provider.charge(1, "usd", "tok_visa").await.unwrap();
		assert_ne!(first.id, second.id);
	}

	#[rstest]
	#[case("ch_test123", 1000)]
	#[case("ch_test123", 500)]
	#[case("", -1)]
	#[tokio::test]
	async fn test_refund_always_succeeds(
		provider: StripeProvider,
		#[case] charge_id: &str,
		#[case] amount: i64,
	) {
		assert!(provider.refund(charge_id, amount).await.is_ok());
	}

	#[rstest]
	#[tokio::test]
	async fn test_create_subscription_returns_active_subscription(provider: StripeProvider) {
		let subscription = provider
			.create_subscription("cus_test123", "plan_test123")
			.await
			.unwrap();

		assert_eq!(subscription.customer_id, "cus_test123");
		assert_eq!(subscription.plan_id, "plan_test123");
		assert_eq!(subscription.status, "active");
		assert!(subscription.id.starts_with("sub_"));
	}
}

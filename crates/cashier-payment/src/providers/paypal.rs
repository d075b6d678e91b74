//! PayPal payment provider.

use async_trait::async_trait;
use secrecy::SecretString;
use uuid::Uuid;

use crate::provider::PaymentProvider;
use crate::types::{Operation, PaymentError, PaymentResult, Subscription};

/// Provider name reported by [`PayPalProvider`].
pub const PROVIDER_NAME: &str = "paypal";

/// Status of a successful PayPal capture.
pub const CHARGE_STATUS: &str = "COMPLETED";

/// PayPal payment provider.
///
/// Charges are accepted for any amount, including zero and negative values.
/// Subscriptions are not supported.
#[derive(Debug)]
pub struct PayPalProvider {
	/// OAuth client id
	_client_id: SecretString,
	/// OAuth client secret
	_client_secret: SecretString,
}

impl PayPalProvider {
	/// Creates a new PayPal provider.
	///
	/// # Arguments
	///
	/// * `client_id` - OAuth client id
	/// * `client_secret` - OAuth client secret
	pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
		Self {
			_client_id: SecretString::from(client_id.into()),
			_client_secret: SecretString::from(client_secret.into()),
		}
	}

	#[cfg(test)]
	pub(crate) fn credentials(&self) -> (&SecretString, &SecretString) {
		(&self._client_id, &self._client_secret)
	}
}

#[async_trait]
impl PaymentProvider for PayPalProvider {
	fn name(&self) -> &'static str {
		PROVIDER_NAME
	}

	async fn charge(
		&self,
		amount: i64,
		currency: &str,
		_source: &str,
	) -> Result<PaymentResult, PaymentError> {
		let result = PaymentResult {
			id: format!("PAYID-{}", Uuid::new_v4().simple().to_string().to_uppercase()),
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
		_customer_id: &str,
		_plan_id: &str,
	) -> Result<Subscription, PaymentError> {
		tracing::debug!(provider = PROVIDER_NAME, "subscriptions are not supported");
		Err(PaymentError::Unsupported {
			provider: PROVIDER_NAME,
			operation: Operation::CreateSubscription,
		})
	}
}

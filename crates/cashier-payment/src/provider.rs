//! Payment provider abstraction.

use async_trait::async_trait;

use crate::types::{PaymentError, PaymentResult, Subscription};

/// Capability contract implemented by every payment provider.
///
/// Implementations hold only their own credentials and keep no state between
/// calls, so a single instance can be shared behind an `Arc<dyn PaymentProvider>`
/// by any number of tasks.
///
/// Dropping a returned future abandons the operation. The bundled providers
/// never suspend, so there is nothing to roll back.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
	/// Short lowercase provider name used in errors and log events.
	fn name(&self) -> &'static str;

	/// Charges `amount` minor currency units from `source`.
	///
	/// On success the returned [`PaymentResult`] echoes `amount` and
	/// `currency`, carries a non-empty identifier, and reports a
	/// provider-specific status.
	///
	/// # Errors
	///
	/// Returns [`PaymentError::InvalidAmount`] if the provider enforces a
	/// positive amount and `amount` is not, or [`PaymentError::PaymentFailed`]
	/// if the provider declines the charge.
	async fn charge(
		&self,
		amount: i64,
		currency: &str,
		source: &str,
	) -> Result<PaymentResult, PaymentError>;

	/// Refunds `amount` minor currency units of a previous charge.
	async fn refund(&self, charge_id: &str, amount: i64) -> Result<(), PaymentError>;

	/// Subscribes `customer_id` to `plan_id`.
	///
	/// # Errors
	///
	/// Returns [`PaymentError::Unsupported`] if the provider has no
	/// subscription support.
	async fn create_subscription(
		&self,
		customer_id: &str,
		plan_id: &str,
	) -> Result<Subscription, PaymentError>;
}

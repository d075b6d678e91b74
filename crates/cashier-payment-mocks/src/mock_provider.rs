//! Mock provider for testing code written against the PaymentProvider trait.

use async_trait::async_trait;
use cashier_payment::{Operation, PaymentError, PaymentProvider, PaymentResult, Subscription};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Provider name reported by [`MockPaymentProvider`].
pub const PROVIDER_NAME: &str = "mock";

/// A refund observed by [`MockPaymentProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRefund {
	/// Charge the refund was issued against
	pub charge_id: String,
	/// Refunded amount in minor currency units
	pub amount: i64,
}

/// Mock payment provider for testing.
///
/// This provider stores every successful operation in memory and can be
/// configured to fail the next operation for testing error paths. Clones
/// share the same storage, so a test can hand one clone to the code under
/// test and inspect the other.
#[derive(Clone)]
pub struct MockPaymentProvider {
	charges: Arc<RwLock<HashMap<String, PaymentResult>>>,
	refunds: Arc<RwLock<Vec<RecordedRefund>>>,
	subscriptions: Arc<RwLock<HashMap<String, Subscription>>>,
	fail_next: Arc<RwLock<Option<PaymentError>>>,
	subscriptions_enabled: bool,
}

impl MockPaymentProvider {
	/// Creates a new mock provider with subscription support.
	pub fn new() -> Self {
		Self {
			charges: Arc::new(RwLock::new(HashMap::new())),
			refunds: Arc::new(RwLock::new(Vec::new())),
			subscriptions: Arc::new(RwLock::new(HashMap::new())),
			fail_next: Arc::new(RwLock::new(None)),
			subscriptions_enabled: true,
		}
	}

	/// Enables or disables subscription support.
	///
	/// With subscriptions disabled, `create_subscription` fails with
	/// [`PaymentError::Unsupported`].
	pub fn with_subscriptions(mut self, enabled: bool) -> Self {
		self.subscriptions_enabled = enabled;
		self
	}

	/// Configures the error returned by the next operation.
	///
	/// # Arguments
	///
	/// * `error` - Error for the next charge, refund or subscription call;
	///   `None` clears a pending failure
	pub async fn set_fail_next(&self, error: Option<PaymentError>) {
		*self.fail_next.write().await = error;
	}

	/// Clears all stored data.
	pub async fn clear(&self) {
		self.charges.write().await.clear();
		self.refunds.write().await.clear();
		self.subscriptions.write().await.clear();
	}

	/// Gets the number of stored charges.
	pub async fn charge_count(&self) -> usize {
		self.charges.read().await.len()
	}

	/// Gets the number of recorded refunds.
	pub async fn refund_count(&self) -> usize {
		self.refunds.read().await.len()
	}

	/// Gets the number of stored subscriptions.
	pub async fn subscription_count(&self) -> usize {
		self.subscriptions.read().await.len()
	}

	/// Gets a stored charge by id.
	pub async fn get_charge(&self, id: &str) -> Option<PaymentResult> {
		self.charges.read().await.get(id).cloned()
	}

	/// Gets all recorded refunds in call order.
	pub async fn refunds(&self) -> Vec<RecordedRefund> {
		self.refunds.read().await.clone()
	}

	async fn take_failure(&self) -> Result<(), PaymentError> {
		match self.fail_next.write().await.take() {
			Some(error) => Err(error),
			None => Ok(()),
		}
	}
}

impl Default for MockPaymentProvider {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl PaymentProvider for MockPaymentProvider {
	fn name(&self) -> &'static str {
		PROVIDER_NAME
	}

	async fn charge(
		&self,
		amount: i64,
		currency: &str,
		_source: &str,
	) -> Result<PaymentResult, PaymentError> {
		self.take_failure().await?;

		let id = format!("ch_mock_{}", Uuid::new_v4());
		let result = PaymentResult {
			id: id.clone(),
			amount,
			currency: currency.to_string(),
			status: "succeeded".to_string(),
		};

		self.charges.write().await.insert(id, result.clone());
		Ok(result)
	}

	async fn refund(&self, charge_id: &str, amount: i64) -> Result<(), PaymentError> {
		self.take_failure().await?;

		self.refunds.write().await.push(RecordedRefund {
			charge_id: charge_id.to_string(),
			amount,
		});
		Ok(())
	}

	async fn create_subscription(
		&self,
		customer_id: &str,
		plan_id: &str,
	) -> Result<Subscription, PaymentError> {
		self.take_failure().await?;

		if !self.subscriptions_enabled {
			return Err(PaymentError::Unsupported {
				provider: PROVIDER_NAME,
				operation: Operation::CreateSubscription,
			});
		}

		let id = format!("sub_mock_{}", Uuid::new_v4());
		let subscription = Subscription {
			id: id.clone(),
			customer_id: customer_id.to_string(),
			plan_id: plan_id.to_string(),
			status: "active".to_string(),
		};

		self.subscriptions
			.write()
			.await
			.insert(id, subscription.clone());
		Ok(subscription)
	}
}

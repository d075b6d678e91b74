//! Subscription types.

use serde::{Deserialize, Serialize};

/// Recurring billing arrangement between a customer and a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
	/// Provider-assigned subscription identifier
	pub id: String,
	/// Customer being billed
	pub customer_id: String,
	/// Plan the customer is subscribed to
	pub plan_id: String,
	/// Provider-specific status (e.g. active)
	pub status: String,
}

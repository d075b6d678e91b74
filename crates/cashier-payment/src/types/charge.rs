//! Charge result types.

use serde::{Deserialize, Serialize};

/// Outcome of a successful charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentResult {
	/// Provider-assigned charge identifier
	pub id: String,
	/// Charged amount in minor currency units
	pub amount: i64,
	/// Currency code as supplied by the caller
	pub currency: String,
	/// Provider-specific status (succeeded, COMPLETED)
	pub status: String,
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_payment_result_serializes_with_plain_field_names() {
		let result = PaymentResult {
			id: "ch_123".to_string(),
			amount: 1000,
			currency: "usd".to_string(),
			status: "succeeded".to_string(),
		};

		let json = serde_json::to_value(&result).unwrap();

		assert_eq!(json["id"], "ch_123");
		assert_eq!(json["amount"], 1000);
		assert_eq!(json["currency"], "usd");
		assert_eq!(json["status"], "succeeded");
	}
}

//! Error types for payment operations.

use std::fmt;
use thiserror::Error;

/// Provider operation, as named in [`PaymentError::Unsupported`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
	/// One-time charge
	Charge,
	/// Refund of a previous charge
	Refund,
	/// Subscription creation
	CreateSubscription,
}

impl Operation {
	/// Returns the snake_case operation name.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Charge => "charge",
			Self::Refund => "refund",
			Self::CreateSubscription => "create_subscription",
		}
	}
}

impl fmt::Display for Operation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Payment operation errors.
///
/// Match on the variant, never on the rendered message.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
	/// Charge amount was zero or negative
	#[error("Invalid payment amount: {0}")]
	InvalidAmount(i64),

	/// Charge or refund was declined by the provider
	///
	/// The bundled providers never produce this; it is reserved for
	/// network-backed implementations.
	#[error("Payment failed: {0}")]
	PaymentFailed(String),

	/// Provider does not implement the requested operation
	#[error("Operation not supported by {provider}: {operation}")]
	Unsupported {
		/// Provider name
		provider: &'static str,
		/// Rejected operation
		operation: Operation,
	},
}

impl PaymentError {
	/// Check if this is an invalid amount error
	pub fn is_invalid_amount(&self) -> bool {
		matches!(self, Self::InvalidAmount(_))
	}

	/// Check if this is a payment failure
	pub fn is_payment_failed(&self) -> bool {
		matches!(self, Self::PaymentFailed(_))
	}

	/// Check if this is an unsupported operation error
	pub fn is_unsupported(&self) -> bool {
		matches!(self, Self::Unsupported { .. })
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Operation::Charge, "charge")]
	#[case(Operation::Refund, "refund")]
	#[case(Operation::CreateSubscription, "create_subscription")]
	fn test_operation_display(#[case] operation: Operation, #[case] expected: &str) {
		assert_eq!(operation.to_string(), expected);
	}

	#[rstest]
	fn test_unsupported_message_names_provider_and_operation() {
		let err = PaymentError::Unsupported {
			provider: "paypal",
			operation: Operation::CreateSubscription,
		};

		assert_eq!(
			err.to_string(),
			"Operation not supported by paypal: create_subscription"
		);
	}

	#[rstest]
	fn test_kind_predicates_are_exclusive() {
		let invalid = PaymentError::InvalidAmount(0);
		let failed = PaymentError::PaymentFailed("card declined".to_string());
		let unsupported = PaymentError::Unsupported {
			provider: "paypal",
			operation: Operation::CreateSubscription,
		};

		assert!(invalid.is_invalid_amount());
		assert!(!invalid.is_payment_failed());
		assert!(!invalid.is_unsupported());

		assert!(failed.is_payment_failed());
		assert!(!failed.is_invalid_amount());

		assert!(unsupported.is_unsupported());
		assert!(!unsupported.is_payment_failed());
	}

	#[rstest]
	fn test_errors_compare_by_value_not_message() {
		assert_eq!(PaymentError::InvalidAmount(-5), PaymentError::InvalidAmount(-5));
		assert_ne!(PaymentError::InvalidAmount(-5), PaymentError::InvalidAmount(0));
	}
}

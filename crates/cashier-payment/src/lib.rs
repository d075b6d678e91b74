//! # Cashier Payment
//!
//! A vendor-neutral contract over external payment processors.
//!
//! Applications depend on [`PaymentProvider`] and pick a concrete provider at
//! construction time. Every provider exposes the same three capabilities:
//!
//! - **Charge**: move funds from a payment source to the merchant
//! - **Refund**: reverse some or all of a completed charge
//! - **Subscription**: start recurring billing of a customer against a plan
//!
//! Not every provider supports every capability. An unsupported operation is
//! reported as [`PaymentError::Unsupported`] rather than hidden behind a
//! separate trait.
//!
//! ## Providers
//!
//! | Provider | Charge validation | Subscriptions |
//! |---|---|---|
//! | [`StripeProvider`] | amount must be positive | supported |
//! | [`PayPalProvider`] | none | unsupported |
//!
//! The bundled providers perform no network I/O. They return generated
//! identifiers and fixed provider-specific statuses.
//!
//! ## Example
//!
//! ```rust
//! use cashier_payment::{PaymentError, PaymentProvider, StripeProvider};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), PaymentError> {
//! let provider: Arc<dyn PaymentProvider> = Arc::new(StripeProvider::new("sk_test_123"));
//!
//! let charge = provider.charge(1000, "usd", "tok_visa").await?;
//! assert_eq!(charge.amount, 1000);
//! assert_eq!(charge.status, "succeeded");
//!
//! provider.refund(&charge.id, 500).await?;
//! # Ok(())
//! # }
//! ```

pub mod provider;
pub mod providers;
pub mod types;

pub use provider::PaymentProvider;
pub use providers::{PayPalProvider, StripeProvider};
pub use types::{Operation, PaymentError, PaymentResult, Subscription};

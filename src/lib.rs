//! # Cashier
//!
//! A vendor-neutral payment provider abstraction for charges, refunds and
//! subscriptions.
//!
//! Applications program against [`PaymentProvider`] and choose a concrete
//! provider at startup, either directly or from settings.
//!
//! ## Feature Flags
//!
//! - `conf` (default) - provider settings from TOML or environment, plus the
//!   provider factory
//! - `test` - in-memory [`MockPaymentProvider`](test::MockPaymentProvider) for
//!   downstream tests
//! - `full` - all of the above
//!
//! ## Quick Example
//!
//! ```rust
//! use cashier::{PaymentError, PaymentProvider, PayPalProvider, StripeProvider};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), PaymentError> {
//! let providers: Vec<Arc<dyn PaymentProvider>> = vec![
//!     Arc::new(StripeProvider::new("sk_test_123")),
//!     Arc::new(PayPalProvider::new("client_id", "client_secret")),
//! ];
//!
//! for provider in &providers {
//!     let charge = provider.charge(1000, "usd", "tok_visa").await?;
//!     provider.refund(&charge.id, charge.amount).await?;
//! }
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "conf")]
pub mod conf;
#[cfg(feature = "test")]
pub mod test;

// Re-export the provider contract and data model
pub use cashier_payment::{
	Operation, PayPalProvider, PaymentError, PaymentProvider, PaymentResult, StripeProvider,
	Subscription,
};

// Re-export provider-specific constants
pub mod providers {
	pub use cashier_payment::providers::{paypal, stripe};
}

// Re-export settings
#[cfg(feature = "conf")]
pub use cashier_conf::{ProviderKind, ProviderSettings, SettingsError, build_provider};

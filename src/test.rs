//! Testing utilities module.
//!
//! # Examples
//!
//! ```rust
//! use cashier::test::MockPaymentProvider;
//!
//! let provider = MockPaymentProvider::new().with_subscriptions(false);
//! ```

pub use cashier_payment_mocks::*;

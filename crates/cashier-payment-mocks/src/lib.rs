//! Test doubles for code that depends on `cashier-payment`.

pub mod mock_provider;

pub use mock_provider::{MockPaymentProvider, RecordedRefund};

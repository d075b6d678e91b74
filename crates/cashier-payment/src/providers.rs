//! Concrete payment providers.

pub mod paypal;
pub mod stripe;

pub use paypal::PayPalProvider;
pub use stripe::StripeProvider;

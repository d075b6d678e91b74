//! # Cashier Conf
//!
//! Selects and configures a payment provider at startup.
//!
//! Settings come from a TOML file or from environment variables and resolve
//! to a [`ProviderSettings`] value, which builds the provider behind an
//! `Arc<dyn PaymentProvider>`.
//!
//! ## TOML
//!
//! ```toml
//! [payment]
//! provider = "paypal"
//! client_id = "client_id_123"
//! client_secret = "client_secret_123"
//! ```
//!
//! ## Environment
//!
//! | Variable | Used by |
//! |---|---|
//! | `CASHIER_PROVIDER` | all (`stripe` or `paypal`) |
//! | `CASHIER_STRIPE_API_KEY` | Stripe |
//! | `CASHIER_PAYPAL_CLIENT_ID` | PayPal |
//! | `CASHIER_PAYPAL_CLIENT_SECRET` | PayPal |
//!
//! Credential values are passed to the provider untouched.
//!
//! ## Example
//!
//! ```rust
//! use cashier_conf::ProviderSettings;
//! use cashier_payment::PaymentProvider;
//!
//! let settings = ProviderSettings::from_toml_str(
//!     r#"
//!     [payment]
//!     provider = "stripe"
//!     api_key = "sk_test_123"
//!     "#,
//! )
//! .unwrap();
//!
//! let provider = settings.build();
//! assert_eq!(provider.name(), "stripe");
//! ```

pub mod env;
pub mod error;
pub mod kind;
pub mod settings;

pub use env::{DEFAULT_PREFIX, EnvSettingsLoader};
pub use error::SettingsError;
pub use kind::ProviderKind;
pub use settings::{ProviderSettings, build_provider};

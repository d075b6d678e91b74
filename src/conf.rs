//! Provider settings module.
//!
//! # Examples
//!
//! ```rust,no_run
//! use cashier::conf::EnvSettingsLoader;
//!
//! let settings = EnvSettingsLoader::new().with_prefix("BILLING_").load().unwrap();
//! let provider = settings.build();
//! ```

pub use cashier_conf::*;

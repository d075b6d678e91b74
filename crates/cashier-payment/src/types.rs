//! Data types shared by all payment providers.

pub mod charge;
pub mod error;
pub mod subscription;

pub use charge::PaymentResult;
pub use error::{Operation, PaymentError};
pub use subscription::Subscription;

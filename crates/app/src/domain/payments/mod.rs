//! Payments

pub mod delegate;
pub mod errors;
pub mod models;
pub mod stripe;

pub use delegate::*;
pub use errors::PaymentError;

//! Orders

pub mod errors;
pub mod models;
pub mod sink;

pub use errors::OrderSinkError;
pub use sink::*;

//! Checkout
//!
//! Converts the owner's cart into a durable order: validate, authorize,
//! snapshot the cart, materialize the order atomically, drain the consumed
//! lines, then dispatch confirmation email best-effort.

pub mod errors;
pub mod models;
pub mod service;
pub mod validation;

pub use errors::{CheckoutError, ValidationError};
pub use service::*;

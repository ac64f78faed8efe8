//! Checkout Models

use jiff::Timestamp;

use crate::domain::{orders::models::OrderUuid, users::models::UserUuid};

/// A checkout submission.
///
/// `user_uuid` and `email` optionally name the order's owner explicitly;
/// both must then match the authenticated caller. `email`, when present,
/// additionally overrides the confirmation recipient. Card sub-fields are
/// required only when `payment_method` is `"card"`.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutRequest {
    pub user_uuid: Option<UserUuid>,
    pub email: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub zip_code: String,
    pub country: String,
    pub phone: String,
    pub payment_method: String,
    pub card_number: Option<String>,
    pub expiry_date: Option<String>,
    pub cvv: Option<String>,
}

/// The result of a successful checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutReceipt {
    pub order_uuid: OrderUuid,
    pub total_amount: u64,
    pub placed_at: Timestamp,
}

//! Checkout errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckoutError {
    /// A request field failed validation. Carries the first violated rule
    /// only, never an aggregate.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("cart is empty")]
    EmptyCart,

    /// The request named an owner other than the authenticated caller.
    #[error("orders can only be placed for the authenticated account")]
    AuthorizationMismatch,

    #[error("user not found")]
    NotFound,

    /// The order and its lines were rolled back together; nothing was
    /// partially committed.
    #[error("storage error")]
    Persistence(#[source] sqlx::Error),
}

/// Field-level validation failures, one per rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Email should be valid")]
    InvalidEmail,

    #[error("First name is required")]
    MissingFirstName,

    #[error("Last name is required")]
    MissingLastName,

    #[error("Address is required")]
    MissingAddress,

    #[error("City is required")]
    MissingCity,

    #[error("ZIP code is required")]
    MissingZipCode,

    #[error("Country is required")]
    MissingCountry,

    #[error("Phone is required")]
    MissingPhone,

    #[error("Phone number should be valid")]
    InvalidPhone,

    #[error("Payment method is required")]
    MissingPaymentMethod,

    #[error("Card number is required for card payment.")]
    MissingCardNumber,

    #[error("Expiry date is required for card payment.")]
    MissingExpiryDate,

    #[error("CVV is required for card payment.")]
    MissingCvv,

    #[error("Card number must be 16 digits.")]
    InvalidCardNumber,

    #[error("Expiry date must be in MM/YY format.")]
    InvalidExpiryDate,

    #[error("CVV must be 3 digits.")]
    InvalidCvv,
}

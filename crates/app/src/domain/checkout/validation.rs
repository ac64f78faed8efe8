//! Checkout request validation.
//!
//! Rules are checked in a fixed order and the first violation wins, so the
//! caller always sees exactly one field-specific message. Contact fields
//! come first, then the card sub-fields when the payment method is "card":
//! presence of number, expiry, and CVV, then their formats in the same
//! order.

use crate::domain::checkout::{errors::ValidationError, models::CheckoutRequest};

pub fn validate(request: &CheckoutRequest) -> Result<(), ValidationError> {
    if let Some(email) = &request.email {
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
    }

    require(&request.first_name, ValidationError::MissingFirstName)?;
    require(&request.last_name, ValidationError::MissingLastName)?;
    require(&request.address, ValidationError::MissingAddress)?;
    require(&request.city, ValidationError::MissingCity)?;
    require(&request.zip_code, ValidationError::MissingZipCode)?;
    require(&request.country, ValidationError::MissingCountry)?;
    require(&request.phone, ValidationError::MissingPhone)?;

    if !is_valid_phone(request.phone.trim()) {
        return Err(ValidationError::InvalidPhone);
    }

    require(&request.payment_method, ValidationError::MissingPaymentMethod)?;

    if request.payment_method == "card" {
        validate_card(request)?;
    }

    Ok(())
}

fn validate_card(request: &CheckoutRequest) -> Result<(), ValidationError> {
    let card_number = present(request.card_number.as_deref())
        .ok_or(ValidationError::MissingCardNumber)?;
    let expiry_date = present(request.expiry_date.as_deref())
        .ok_or(ValidationError::MissingExpiryDate)?;
    let cvv = present(request.cvv.as_deref()).ok_or(ValidationError::MissingCvv)?;

    // 16 digits once embedded spaces are stripped.
    let digits: String = card_number.chars().filter(|c| !c.is_whitespace()).collect();

    if digits.len() != 16 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidCardNumber);
    }

    if !is_valid_expiry(expiry_date) {
        return Err(ValidationError::InvalidExpiryDate);
    }

    if cvv.len() != 3 || !cvv.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidCvv);
    }

    Ok(())
}

fn require(value: &str, error: ValidationError) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error);
    }

    Ok(())
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// E.164-ish: optional leading `+`, first digit 1-9, 2 to 15 digits total.
fn is_valid_phone(phone: &str) -> bool {
    let digits = phone.strip_prefix('+').unwrap_or(phone);

    (2..=15).contains(&digits.len())
        && digits.chars().all(|c| c.is_ascii_digit())
        && !digits.starts_with('0')
}

/// MM/YY, with the slash optional.
fn is_valid_expiry(expiry: &str) -> bool {
    let (month, year) = match expiry.split_once('/') {
        Some(parts) => parts,
        None if expiry.len() == 4 => expiry.split_at_checked(2).unwrap_or(("", "")),
        None => return false,
    };

    let month_ok = month.len() == 2
        && month.chars().all(|c| c.is_ascii_digit())
        && matches!(month.parse::<u8>(), Ok(1..=12));

    month_ok && year.len() == 2 && year.chars().all(|c| c.is_ascii_digit())
}

/// A plausible mailbox shape: something before and after a single `@`, a dot
/// in the domain, no whitespace.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace)
}

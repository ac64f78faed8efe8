//! Errors

use bookstore_app::domain::checkout::CheckoutError;
use salvo::http::StatusError;
use tracing::error;

pub(crate) fn into_status_error(error: CheckoutError) -> StatusError {
    match error {
        CheckoutError::Validation(source) => {
            StatusError::bad_request().brief(format!("Validation failed: {source}"))
        }
        CheckoutError::EmptyCart => StatusError::bad_request().brief("Cart is empty"),
        CheckoutError::AuthorizationMismatch => StatusError::forbidden()
            .brief("Access denied: You can only place orders for yourself"),
        CheckoutError::NotFound => StatusError::not_found().brief("User not found"),
        CheckoutError::Persistence(source) => {
            error!("checkout persistence failure: {source}");

            StatusError::internal_server_error()
        }
    }
}

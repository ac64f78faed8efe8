//! Checkout Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bookstore_app::domain::checkout::models::{CheckoutReceipt, CheckoutRequest};

use crate::{checkout::errors::into_status_error, extensions::*, state::State};

/// Checkout Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutRequestBody {
    /// Optional explicit owner; must match the authenticated user
    pub user_uuid: Option<Uuid>,

    /// Optional email: identity cross-check when no `user_uuid` is given,
    /// and confirmation-recipient override either way
    pub email: Option<String>,

    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub zip_code: String,
    pub country: String,

    /// E.164-ish phone number
    pub phone: String,

    /// Payment method; `"card"` requires the card sub-fields
    pub payment_method: String,

    pub card_number: Option<String>,
    pub expiry_date: Option<String>,
    pub cvv: Option<String>,
}

impl From<CheckoutRequestBody> for CheckoutRequest {
    fn from(body: CheckoutRequestBody) -> Self {
        CheckoutRequest {
            user_uuid: body.user_uuid.map(Into::into),
            email: body.email,
            first_name: body.first_name,
            last_name: body.last_name,
            address: body.address,
            city: body.city,
            zip_code: body.zip_code,
            country: body.country,
            phone: body.phone,
            payment_method: body.payment_method,
            card_number: body.card_number,
            expiry_date: body.expiry_date,
            cvv: body.cvv,
        }
    }
}

/// Checkout Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutResponse {
    pub success: bool,
    pub message: String,

    /// The placed order's UUID
    pub order_uuid: Uuid,

    /// Total amount in minor currency units
    pub total_amount: u64,

    /// The date and time the order was placed
    pub placed_at: String,
}

impl From<CheckoutReceipt> for CheckoutResponse {
    fn from(receipt: CheckoutReceipt) -> Self {
        Self {
            success: true,
            message: "Order placed successfully!".to_string(),
            order_uuid: receipt.order_uuid.into_uuid(),
            total_amount: receipt.total_amount,
            placed_at: receipt.placed_at.to_string(),
        }
    }
}

/// Checkout Handler
///
/// Converts the authenticated user's cart into a pending order and sends
/// confirmation email best-effort. The response reports success as soon as
/// the order is durably placed, whether or not any email was delivered.
#[endpoint(
    tags("checkout"),
    summary = "Place Order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Order placed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Validation failed or cart empty"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Not authenticated"),
        (status_code = StatusCode::FORBIDDEN, description = "Request names another account"),
        (status_code = StatusCode::NOT_FOUND, description = "Owner not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CheckoutRequestBody>,
    depot: &mut Depot,
) -> Result<Json<CheckoutResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.current_user_or_401()?;

    let receipt = state
        .checkout
        .place_order(user, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(receipt.into()))
}

//! Get Cart Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bookstore_app::domain::carts::models::CartLine;

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// The lines in the cart
    pub items: Vec<CartLineResponse>,

    /// Sum over lines of quantity times current unit price
    pub subtotal: u64,
}

/// Cart Line Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartLineResponse {
    /// The book in this line
    pub book_uuid: Uuid,

    /// Book title
    pub title: String,

    /// Current catalog price in minor currency units
    pub unit_price: u64,

    /// Quantity
    pub quantity: u32,
}

impl From<CartLine> for CartLineResponse {
    fn from(line: CartLine) -> Self {
        Self {
            book_uuid: line.book_uuid.into_uuid(),
            title: line.title,
            unit_price: line.unit_price,
            quantity: line.quantity,
        }
    }
}

/// Get Cart Handler
///
/// Returns the authenticated user's cart.
#[endpoint(
    tags("cart"),
    summary = "Get Cart",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.current_user_or_401()?;

    let lines = state
        .carts
        .get_cart(user.uuid)
        .await
        .map_err(into_status_error)?;

    let subtotal = lines
        .iter()
        .map(|line| u64::from(line.quantity) * line.unit_price)
        .sum();

    Ok(Json(CartResponse {
        items: lines.into_iter().map(Into::into).collect(),
        subtotal,
    }))
}

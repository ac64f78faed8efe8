//! Get Order Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bookstore_app::domain::orders::models::{OrderDetails, OrderLine};

use crate::{extensions::*, orders::errors::into_status_error, state::State};

/// Order Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    /// The unique identifier of the order
    pub uuid: Uuid,

    /// Total amount in minor currency units
    pub total_amount: u64,

    /// Status tag
    pub status: String,

    /// The date and time the order was placed
    pub created_at: String,

    /// The lines of the order
    pub lines: Vec<OrderLineResponse>,
}

/// Order Line Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderLineResponse {
    /// The book this line covers
    pub book_uuid: Uuid,

    /// Book title
    pub title: String,

    /// Quantity
    pub quantity: u32,

    /// Unit price captured at checkout, in minor currency units
    pub unit_price: u64,
}

impl From<OrderLine> for OrderLineResponse {
    fn from(line: OrderLine) -> Self {
        Self {
            book_uuid: line.book_uuid.into_uuid(),
            title: line.title,
            quantity: line.quantity,
            unit_price: line.unit_price,
        }
    }
}

impl From<OrderDetails> for OrderResponse {
    fn from(details: OrderDetails) -> Self {
        Self {
            uuid: details.order.uuid.into_uuid(),
            total_amount: details.order.total_amount,
            status: details.order.status.to_string(),
            created_at: details.order.created_at.to_string(),
            lines: details.lines.into_iter().map(Into::into).collect(),
        }
    }
}

/// Get Order Handler
///
/// Returns one of the authenticated user's orders with its lines.
#[endpoint(
    tags("orders"),
    summary = "Get Order",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.current_user_or_401()?;

    let details = state
        .orders
        .get_order(user.uuid, order.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(details.into()))
}

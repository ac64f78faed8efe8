//! Order Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bookstore_app::domain::orders::models::Order;

use crate::{extensions::*, orders::errors::into_status_error, state::State};

/// Orders Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrdersResponse {
    /// The caller's orders, newest first
    pub orders: Vec<OrderSummaryResponse>,
}

/// Order Summary Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderSummaryResponse {
    /// The unique identifier of the order
    pub uuid: Uuid,

    /// Total amount in minor currency units
    pub total_amount: u64,

    /// Status tag
    pub status: String,

    /// The date and time the order was placed
    pub created_at: String,
}

impl From<Order> for OrderSummaryResponse {
    fn from(order: Order) -> Self {
        Self {
            uuid: order.uuid.into_uuid(),
            total_amount: order.total_amount,
            status: order.status.to_string(),
            created_at: order.created_at.to_string(),
        }
    }
}

/// Order Index Handler
///
/// Returns the authenticated user's orders.
#[endpoint(
    tags("orders"),
    summary = "List Orders",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<OrdersResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.current_user_or_401()?;

    let orders = state
        .orders
        .list_orders(user.uuid)
        .await
        .map_err(into_status_error)?;

    Ok(Json(OrdersResponse {
        orders: orders.into_iter().map(Into::into).collect(),
    }))
}

//! Clear Cart Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Cart Cleared Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartClearedResponse {
    /// Number of lines removed
    pub removed: u64,
}

/// Clear Cart Handler
///
/// Removes every line from the authenticated user's cart. Clearing an empty
/// cart succeeds with zero removals.
#[endpoint(
    tags("cart"),
    summary = "Clear Cart",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartClearedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.current_user_or_401()?;

    let removed = state
        .carts
        .clear_cart(user.uuid)
        .await
        .map_err(into_status_error)?;

    Ok(Json(CartClearedResponse { removed }))
}

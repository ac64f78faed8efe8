//! Update Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    carts::{errors::into_status_error, handlers::get::CartLineResponse},
    extensions::*,
    state::State,
};

/// Update Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateCartItemRequest {
    pub quantity: u32,
}

/// Update Cart Item Handler
///
/// Overwrites the quantity of a line, creating it when absent.
#[endpoint(
    tags("cart"),
    summary = "Set Cart Item Quantity",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cart line updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Book not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    book: PathParam<Uuid>,
    json: JsonBody<UpdateCartItemRequest>,
    depot: &mut Depot,
) -> Result<Json<CartLineResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.current_user_or_401()?;

    let line = state
        .carts
        .set_quantity(user.uuid, book.into_inner().into(), json.into_inner().quantity)
        .await
        .map_err(into_status_error)?;

    Ok(Json(line.into()))
}

#[cfg(test)]
mod tests {
    use bookstore_app::domain::{
        books::models::BookUuid,
        carts::{CartsServiceError, MockCartsService},
    };
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use crate::test_helpers::{TEST_USER_UUID, carts_service};

    use super::{super::tests::make_cart_line, *};

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("cart/items/{book}").put(handler))
    }

    #[tokio::test]
    async fn test_set_quantity_success() -> TestResult {
        let book = BookUuid::new();
        let line = make_cart_line(book, 4, 13_99);

        let mut carts = MockCartsService::new();

        carts
            .expect_set_quantity()
            .once()
            .withf(move |owner, b, quantity| {
                *owner == TEST_USER_UUID && *b == book && *quantity == 4
            })
            .return_once(move |_, _, _| Ok(line));

        let mut res = TestClient::put(format!("http://example.com/cart/items/{book}"))
            .json(&json!({ "quantity": 4 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: CartLineResponse = res.take_json().await?;

        assert_eq!(body.quantity, 4);

        Ok(())
    }

    #[tokio::test]
    async fn test_set_quantity_unknown_book_returns_404() -> TestResult {
        let book = BookUuid::new();

        let mut carts = MockCartsService::new();

        carts
            .expect_set_quantity()
            .once()
            .return_once(|_, _, _| Err(CartsServiceError::NotFound));

        let res = TestClient::put(format!("http://example.com/cart/items/{book}"))
            .json(&json!({ "quantity": 4 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}

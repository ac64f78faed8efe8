//! Update Book Handler

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

use bookstore_app::domain::books::models::BookUpdate;

use crate::{
    books::{errors::into_status_error, handlers::get::BookResponse},
    extensions::*,
    state::State,
};

/// Update Book Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateBookRequest {
    pub title: String,
    pub author: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub price: u64,
    #[serde(default)]
    pub stock: u32,
}

impl From<UpdateBookRequest> for BookUpdate {
    fn from(request: UpdateBookRequest) -> Self {
        BookUpdate {
            title: request.title,
            author: request.author,
            category: request.category,
            description: request.description,
            price: request.price,
            stock: request.stock,
        }
    }
}

/// Update Book Handler
#[endpoint(
    tags("books"),
    summary = "Update Book",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Book updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Book not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    book: PathParam<Uuid>,
    json: JsonBody<UpdateBookRequest>,
    depot: &mut Depot,
) -> Result<Json<BookResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let updated = state
        .books
        .update_book(book.into_inner().into(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(updated.into()))
}

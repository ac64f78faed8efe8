//! Create Book Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bookstore_app::domain::books::models::NewBook;

use crate::{books::errors::into_status_error, extensions::*, state::State};

/// Create Book Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateBookRequest {
    pub uuid: Uuid,
    pub title: String,
    pub author: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub price: u64,
    #[serde(default)]
    pub stock: u32,
}

impl From<CreateBookRequest> for NewBook {
    fn from(request: CreateBookRequest) -> Self {
        NewBook {
            uuid: request.uuid.into(),
            title: request.title,
            author: request.author,
            category: request.category,
            description: request.description,
            price: request.price,
            stock: request.stock,
        }
    }
}

/// Book Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BookCreatedResponse {
    /// Created book UUID
    pub uuid: Uuid,
}

/// Create Book Handler
#[endpoint(
    tags("books"),
    summary = "Create Book",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Book created"),
        (status_code = StatusCode::CONFLICT, description = "Book already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateBookRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<BookCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let uuid = state
        .books
        .create_book(json.into_inner().into())
        .await
        .map_err(into_status_error)?
        .uuid;

    res.add_header(LOCATION, format!("/books/{uuid}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(BookCreatedResponse {
        uuid: uuid.into_uuid(),
    }))
}

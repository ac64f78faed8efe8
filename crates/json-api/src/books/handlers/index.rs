//! Book Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use bookstore_app::domain::books::models::BookFilter;

use crate::{
    books::{errors::into_status_error, handlers::get::BookResponse},
    extensions::*,
    state::State,
};

/// Books Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BooksResponse {
    /// The list of books
    pub books: Vec<BookResponse>,
}

/// Book Index Handler
///
/// Returns catalog books, optionally narrowed by category or a
/// case-insensitive title/author search.
#[endpoint(tags("books"), summary = "List Books")]
pub(crate) async fn handler(
    category: QueryParam<String, false>,
    search: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<BooksResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let filter = BookFilter {
        category: category.into_inner(),
        search: search.into_inner(),
    };

    let books = state
        .books
        .list_books(filter)
        .await
        .map_err(into_status_error)?;

    Ok(Json(BooksResponse {
        books: books.into_iter().map(Into::into).collect(),
    }))
}

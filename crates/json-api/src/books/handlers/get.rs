//! Get Book Handler

use std::{string::ToString, sync::Arc};

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bookstore_app::domain::books::models::Book;

use crate::{books::errors::into_status_error, extensions::*, state::State};

/// Book Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BookResponse {
    /// The unique identifier of the book
    pub uuid: Uuid,

    /// Title
    pub title: String,

    /// Author
    pub author: String,

    /// Category tag
    pub category: String,

    /// Description
    pub description: String,

    /// Current price in minor currency units
    pub price: u64,

    /// Units in stock
    pub stock: u32,

    /// The date and time the book was created
    pub created_at: String,

    /// The date and time the book was last updated
    pub updated_at: String,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            uuid: book.uuid.into_uuid(),
            title: book.title,
            author: book.author,
            category: book.category,
            description: book.description,
            price: book.price,
            stock: book.stock,
            created_at: book.created_at.to_string(),
            updated_at: book.updated_at.to_string(),
        }
    }
}

/// Get Book Handler
///
/// Returns a single catalog book.
#[endpoint(tags("books"), summary = "Get Book")]
pub(crate) async fn handler(
    book: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<BookResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let book = state
        .books
        .get_book(book.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(book.into()))
}

#[cfg(test)]
mod tests {
    use bookstore_app::domain::books::{BooksServiceError, MockBooksService, models::BookUuid};
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::books_service;

    use super::{super::tests::make_book, *};

    fn make_service(books: MockBooksService) -> Service {
        books_service(books, Router::with_path("books/{book}").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_200_with_book() -> TestResult {
        let uuid = BookUuid::new();
        let book = make_book(uuid, "1984", 13_99);

        let mut books = MockBooksService::new();

        books
            .expect_get_book()
            .once()
            .withf(move |b| *b == uuid)
            .return_once(move |_| Ok(book));

        let mut res = TestClient::get(format!("http://example.com/books/{uuid}"))
            .send(&make_service(books))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: BookResponse = res.take_json().await?;

        assert_eq!(body.uuid, uuid.into_uuid());
        assert_eq!(body.title, "1984");
        assert_eq!(body.price, 13_99);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_book_returns_404() -> TestResult {
        let uuid = BookUuid::new();

        let mut books = MockBooksService::new();

        books
            .expect_get_book()
            .once()
            .return_once(|_| Err(BooksServiceError::NotFound));

        let res = TestClient::get(format!("http://example.com/books/{uuid}"))
            .send(&make_service(books))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_invalid_uuid_returns_400() -> TestResult {
        let res = TestClient::get("http://example.com/books/123")
            .send(&make_service(MockBooksService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}

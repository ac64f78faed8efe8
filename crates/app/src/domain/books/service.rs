//! Books service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::books::{
        errors::BooksServiceError,
        models::{Book, BookFilter, BookUpdate, BookUuid, NewBook},
        repository::PgBooksRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgBooksService {
    db: Db,
    repository: PgBooksRepository,
}

impl PgBooksService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgBooksRepository::new(),
        }
    }
}

#[async_trait]
impl BooksService for PgBooksService {
    async fn list_books(&self, filter: BookFilter) -> Result<Vec<Book>, BooksServiceError> {
        let mut tx = self.db.begin().await?;

        let books = self.repository.list_books(&mut tx, &filter).await?;

        tx.commit().await?;

        Ok(books)
    }

    async fn get_book(&self, book: BookUuid) -> Result<Book, BooksServiceError> {
        let mut tx = self.db.begin().await?;

        let book = self.repository.get_book(&mut tx, book).await?;

        tx.commit().await?;

        Ok(book)
    }

    async fn create_book(&self, book: NewBook) -> Result<Book, BooksServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.repository.create_book(&mut tx, book).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_book(
        &self,
        book: BookUuid,
        update: BookUpdate,
    ) -> Result<Book, BooksServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self.repository.update_book(&mut tx, book, update).await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_book(&self, book: BookUuid) -> Result<(), BooksServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_book(&mut tx, book).await?;

        if rows_affected == 0 {
            return Err(BooksServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait BooksService: Send + Sync {
    /// Retrieves catalog books matching the filter.
    async fn list_books(&self, filter: BookFilter) -> Result<Vec<Book>, BooksServiceError>;

    /// Retrieve a single book.
    async fn get_book(&self, book: BookUuid) -> Result<Book, BooksServiceError>;

    /// Creates a new book.
    async fn create_book(&self, book: NewBook) -> Result<Book, BooksServiceError>;

    /// Replaces the stored details of a book.
    async fn update_book(
        &self,
        book: BookUuid,
        update: BookUpdate,
    ) -> Result<Book, BooksServiceError>;

    /// Deletes a book with the given UUID.
    async fn delete_book(&self, book: BookUuid) -> Result<(), BooksServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    #[tokio::test]
    async fn create_book_returns_stored_fields() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = BookUuid::new();

        let book = ctx
            .books
            .create_book(NewBook {
                uuid,
                title: "The Great Gatsby".to_string(),
                author: "F. Scott Fitzgerald".to_string(),
                category: "Fiction".to_string(),
                description: "A classic American novel set in the Jazz Age.".to_string(),
                price: 12_99,
                stock: 50,
            })
            .await?;

        assert_eq!(book.uuid, uuid);
        assert_eq!(book.title, "The Great Gatsby");
        assert_eq!(book.price, 12_99);
        assert_eq!(book.stock, 50);

        Ok(())
    }

    #[tokio::test]
    async fn get_book_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.books.get_book(BookUuid::new()).await;

        assert!(
            matches!(result, Err(BooksServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_book_duplicate_uuid_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = BookUuid::new();

        ctx.create_book_with(uuid, "1984", 13_99).await?;

        let result = ctx
            .books
            .create_book(NewBook {
                uuid,
                title: "1984".to_string(),
                author: "George Orwell".to_string(),
                category: "Dystopian".to_string(),
                description: String::new(),
                price: 13_99,
                stock: 60,
            })
            .await;

        assert!(
            matches!(result, Err(BooksServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn list_books_filters_by_category() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.books
            .create_book(NewBook {
                uuid: BookUuid::new(),
                title: "1984".to_string(),
                author: "George Orwell".to_string(),
                category: "Dystopian".to_string(),
                description: String::new(),
                price: 13_99,
                stock: 60,
            })
            .await?;

        ctx.create_book_with(BookUuid::new(), "Pride and Prejudice", 11_99)
            .await?;

        let books = ctx
            .books
            .list_books(BookFilter {
                category: Some("Dystopian".to_string()),
                search: None,
            })
            .await?;

        assert_eq!(books.len(), 1, "expected one dystopian book");
        assert!(books.iter().all(|b| b.category == "Dystopian"));

        Ok(())
    }

    #[tokio::test]
    async fn list_books_search_matches_title_and_author_case_insensitively() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.books
            .create_book(NewBook {
                uuid: BookUuid::new(),
                title: "The Lord of the Rings".to_string(),
                author: "J.R.R. Tolkien".to_string(),
                category: "Fantasy".to_string(),
                description: String::new(),
                price: 24_99,
                stock: 25,
            })
            .await?;

        ctx.create_book_with(BookUuid::new(), "The Catcher in the Rye", 12_49)
            .await?;

        let by_title = ctx
            .books
            .list_books(BookFilter {
                category: None,
                search: Some("lord of".to_string()),
            })
            .await?;

        let by_author = ctx
            .books
            .list_books(BookFilter {
                category: None,
                search: Some("tolkien".to_string()),
            })
            .await?;

        assert_eq!(by_title.len(), 1, "expected one match by title");
        assert_eq!(by_author.len(), 1, "expected one match by author");
        assert_eq!(by_title.first().map(|b| b.uuid), by_author.first().map(|b| b.uuid));

        Ok(())
    }

    #[tokio::test]
    async fn update_book_replaces_fields() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = BookUuid::new();

        ctx.create_book_with(uuid, "The Great Gatsby", 12_99).await?;

        let updated = ctx
            .books
            .update_book(
                uuid,
                BookUpdate {
                    title: "The Great Gatsby".to_string(),
                    author: "F. Scott Fitzgerald".to_string(),
                    category: "Classics".to_string(),
                    description: String::new(),
                    price: 14_49,
                    stock: 12,
                },
            )
            .await?;

        assert_eq!(updated.price, 14_49);
        assert_eq!(updated.category, "Classics");

        Ok(())
    }

    #[tokio::test]
    async fn update_book_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .books
            .update_book(
                BookUuid::new(),
                BookUpdate {
                    title: "x".to_string(),
                    author: "y".to_string(),
                    category: "z".to_string(),
                    description: String::new(),
                    price: 100,
                    stock: 1,
                },
            )
            .await;

        assert!(
            matches!(result, Err(BooksServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn delete_book_makes_it_not_found() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = BookUuid::new();

        ctx.create_book_with(uuid, "1984", 13_99).await?;

        ctx.books.delete_book(uuid).await?;

        let result = ctx.books.get_book(uuid).await;

        assert!(
            matches!(result, Err(BooksServiceError::NotFound)),
            "expected NotFound after deletion, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn delete_book_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.books.delete_book(BookUuid::new()).await;

        assert!(
            matches!(result, Err(BooksServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}

//! Carts service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        books::models::BookUuid,
        carts::{
            errors::CartsServiceError,
            models::{CartLine, NewCartLine},
            repository::PgCartLinesRepository,
        },
        users::models::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    repository: PgCartLinesRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCartLinesRepository::new(),
        }
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn get_cart(&self, owner: UserUuid) -> Result<Vec<CartLine>, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let lines = self.repository.get_cart_lines(&mut tx, owner).await?;

        tx.commit().await?;

        Ok(lines)
    }

    async fn add_item(
        &self,
        owner: UserUuid,
        item: NewCartLine,
    ) -> Result<CartLine, CartsServiceError> {
        if item.quantity < 1 {
            return Err(CartsServiceError::InvalidData);
        }

        let mut tx = self.db.begin().await?;

        let inserted = self
            .repository
            .add_cart_line(&mut tx, owner, item.book_uuid, item.quantity)
            .await?;

        if inserted.is_none() {
            return Err(CartsServiceError::NotFound);
        }

        let line = self
            .repository
            .get_cart_line(&mut tx, owner, item.book_uuid)
            .await?;

        tx.commit().await?;

        Ok(line)
    }

    async fn set_quantity(
        &self,
        owner: UserUuid,
        book: BookUuid,
        quantity: u32,
    ) -> Result<CartLine, CartsServiceError> {
        if quantity < 1 {
            return Err(CartsServiceError::InvalidData);
        }

        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .set_cart_line(&mut tx, owner, book, quantity)
            .await?;

        if updated.is_none() {
            return Err(CartsServiceError::NotFound);
        }

        let line = self.repository.get_cart_line(&mut tx, owner, book).await?;

        tx.commit().await?;

        Ok(line)
    }

    async fn remove_item(&self, owner: UserUuid, book: BookUuid) -> Result<(), CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_cart_line(&mut tx, owner, book).await?;

        if rows_affected == 0 {
            return Err(CartsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn clear_cart(&self, owner: UserUuid) -> Result<u64, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.clear_cart(&mut tx, owner).await?;

        tx.commit().await?;

        Ok(rows_affected)
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Retrieve the owner's current cart lines.
    async fn get_cart(&self, owner: UserUuid) -> Result<Vec<CartLine>, CartsServiceError>;

    /// Add a book to the cart. Adding an existing (owner, book) pair
    /// increments the stored quantity rather than duplicating the line.
    async fn add_item(
        &self,
        owner: UserUuid,
        item: NewCartLine,
    ) -> Result<CartLine, CartsServiceError>;

    /// Overwrite the quantity of a line, creating it if absent.
    async fn set_quantity(
        &self,
        owner: UserUuid,
        book: BookUuid,
        quantity: u32,
    ) -> Result<CartLine, CartsServiceError>;

    /// Remove one line from the cart.
    async fn remove_item(&self, owner: UserUuid, book: BookUuid) -> Result<(), CartsServiceError>;

    /// Remove every line from the cart, returning how many were removed.
    async fn clear_cart(&self, owner: UserUuid) -> Result<u64, CartsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    #[tokio::test]
    async fn get_cart_empty_for_new_user() -> TestResult {
        let ctx = TestContext::new().await;
        let owner = ctx.create_user("reader@example.com").await?;

        let lines = ctx.carts.get_cart(owner.uuid).await?;

        assert!(lines.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn add_item_returns_joined_line() -> TestResult {
        let ctx = TestContext::new().await;
        let owner = ctx.create_user("reader@example.com").await?;
        let book = ctx.create_book("The Great Gatsby", 12_99).await?;

        let line = ctx
            .carts
            .add_item(
                owner.uuid,
                NewCartLine {
                    book_uuid: book.uuid,
                    quantity: 2,
                },
            )
            .await?;

        assert_eq!(line.book_uuid, book.uuid);
        assert_eq!(line.title, "The Great Gatsby");
        assert_eq!(line.unit_price, 12_99);
        assert_eq!(line.quantity, 2);

        Ok(())
    }

    #[tokio::test]
    async fn adding_same_book_twice_increments_quantity() -> TestResult {
        let ctx = TestContext::new().await;
        let owner = ctx.create_user("reader@example.com").await?;
        let book = ctx.create_book("1984", 13_99).await?;

        ctx.carts
            .add_item(
                owner.uuid,
                NewCartLine {
                    book_uuid: book.uuid,
                    quantity: 1,
                },
            )
            .await?;

        let line = ctx
            .carts
            .add_item(
                owner.uuid,
                NewCartLine {
                    book_uuid: book.uuid,
                    quantity: 2,
                },
            )
            .await?;

        assert_eq!(line.quantity, 3);

        let lines = ctx.carts.get_cart(owner.uuid).await?;

        assert_eq!(lines.len(), 1, "expected one line per (owner, book) pair");

        Ok(())
    }

    #[tokio::test]
    async fn add_item_unknown_book_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await;
        let owner = ctx.create_user("reader@example.com").await?;

        let result = ctx
            .carts
            .add_item(
                owner.uuid,
                NewCartLine {
                    book_uuid: BookUuid::new(),
                    quantity: 1,
                },
            )
            .await;

        assert!(
            matches!(result, Err(CartsServiceError::NotFound)),
            "expected NotFound for unknown book, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn add_item_zero_quantity_is_invalid() -> TestResult {
        let ctx = TestContext::new().await;
        let owner = ctx.create_user("reader@example.com").await?;
        let book = ctx.create_book("1984", 13_99).await?;

        let result = ctx
            .carts
            .add_item(
                owner.uuid,
                NewCartLine {
                    book_uuid: book.uuid,
                    quantity: 0,
                },
            )
            .await;

        assert!(
            matches!(result, Err(CartsServiceError::InvalidData)),
            "expected InvalidData for zero quantity, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn set_quantity_overwrites_instead_of_incrementing() -> TestResult {
        let ctx = TestContext::new().await;
        let owner = ctx.create_user("reader@example.com").await?;
        let book = ctx.create_book("1984", 13_99).await?;

        ctx.carts
            .add_item(
                owner.uuid,
                NewCartLine {
                    book_uuid: book.uuid,
                    quantity: 5,
                },
            )
            .await?;

        let line = ctx.carts.set_quantity(owner.uuid, book.uuid, 2).await?;

        assert_eq!(line.quantity, 2);

        Ok(())
    }

    #[tokio::test]
    async fn set_quantity_creates_missing_line() -> TestResult {
        let ctx = TestContext::new().await;
        let owner = ctx.create_user("reader@example.com").await?;
        let book = ctx.create_book("1984", 13_99).await?;

        let line = ctx.carts.set_quantity(owner.uuid, book.uuid, 4).await?;

        assert_eq!(line.quantity, 4);

        Ok(())
    }

    #[tokio::test]
    async fn remove_item_deletes_the_line() -> TestResult {
        let ctx = TestContext::new().await;
        let owner = ctx.create_user("reader@example.com").await?;
        let book = ctx.create_book("1984", 13_99).await?;

        ctx.carts
            .add_item(
                owner.uuid,
                NewCartLine {
                    book_uuid: book.uuid,
                    quantity: 1,
                },
            )
            .await?;

        ctx.carts.remove_item(owner.uuid, book.uuid).await?;

        let lines = ctx.carts.get_cart(owner.uuid).await?;

        assert!(lines.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn remove_item_unknown_line_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await;
        let owner = ctx.create_user("reader@example.com").await?;

        let result = ctx.carts.remove_item(owner.uuid, BookUuid::new()).await;

        assert!(
            matches!(result, Err(CartsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn clear_cart_removes_all_lines_and_reports_count() -> TestResult {
        let ctx = TestContext::new().await;
        let owner = ctx.create_user("reader@example.com").await?;
        let book_a = ctx.create_book("1984", 13_99).await?;
        let book_b = ctx.create_book("Pride and Prejudice", 11_99).await?;

        for book in [book_a.uuid, book_b.uuid] {
            ctx.carts
                .add_item(
                    owner.uuid,
                    NewCartLine {
                        book_uuid: book,
                        quantity: 1,
                    },
                )
                .await?;
        }

        let removed = ctx.carts.clear_cart(owner.uuid).await?;

        assert_eq!(removed, 2);
        assert!(ctx.carts.get_cart(owner.uuid).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn cart_lines_reflect_current_catalog_price() -> TestResult {
        let ctx = TestContext::new().await;
        let owner = ctx.create_user("reader@example.com").await?;
        let book = ctx.create_book("1984", 13_99).await?;

        ctx.carts
            .add_item(
                owner.uuid,
                NewCartLine {
                    book_uuid: book.uuid,
                    quantity: 1,
                },
            )
            .await?;

        ctx.update_book_price(book.uuid, 15_99).await?;

        let lines = ctx.carts.get_cart(owner.uuid).await?;

        assert_eq!(lines.first().map(|l| l.unit_price), Some(15_99));

        Ok(())
    }
}

//! Orders service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        orders::{
            errors::OrdersServiceError,
            models::{Order, OrderDetails, OrderStatus, OrderUuid},
            repository::PgOrdersRepository,
        },
        users::models::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    repository: PgOrdersRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgOrdersRepository::new(),
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn list_orders(&self, owner: UserUuid) -> Result<Vec<Order>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self.repository.list_orders(&mut tx, owner).await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn get_order(
        &self,
        owner: UserUuid,
        order: OrderUuid,
    ) -> Result<OrderDetails, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let order = self.repository.get_order(&mut tx, owner, order).await?;
        let lines = self.repository.get_order_lines(&mut tx, order.uuid).await?;

        tx.commit().await?;

        Ok(OrderDetails { order, lines })
    }

    async fn update_status(
        &self,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_order_status(&mut tx, order, status)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Retrieve the owner's orders, newest first.
    async fn list_orders(&self, owner: UserUuid) -> Result<Vec<Order>, OrdersServiceError>;

    /// Retrieve a single order with its lines. Scoped to the owner.
    async fn get_order(
        &self,
        owner: UserUuid,
        order: OrderUuid,
    ) -> Result<OrderDetails, OrdersServiceError>;

    /// Overwrite an order's status tag. The total amount is never touched.
    async fn update_status(
        &self,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<Order, OrdersServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    #[tokio::test]
    async fn list_orders_empty_for_new_user() -> TestResult {
        let ctx = TestContext::new().await;
        let owner = ctx.create_user("reader@example.com").await?;

        let orders = ctx.orders.list_orders(owner.uuid).await?;

        assert!(orders.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn get_order_unknown_uuid_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await;
        let owner = ctx.create_user("reader@example.com").await?;

        let result = ctx.orders.get_order(owner.uuid, OrderUuid::new()).await;

        assert!(
            matches!(result, Err(OrdersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn get_order_not_visible_to_other_user() -> TestResult {
        let ctx = TestContext::new().await;
        let owner = ctx.create_user("reader@example.com").await?;
        let other = ctx.create_user("other@example.com").await?;

        let receipt = ctx.place_order_for(&owner).await?;

        let result = ctx.orders.get_order(other.uuid, receipt.order_uuid).await;

        assert!(
            matches!(result, Err(OrdersServiceError::NotFound)),
            "expected NotFound for another user's order, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_status_changes_tag_but_not_total() -> TestResult {
        let ctx = TestContext::new().await;
        let owner = ctx.create_user("reader@example.com").await?;

        let receipt = ctx.place_order_for(&owner).await?;

        let updated = ctx
            .orders
            .update_status(receipt.order_uuid, OrderStatus::Shipped)
            .await?;

        assert_eq!(updated.status, OrderStatus::Shipped);
        assert_eq!(updated.total_amount, receipt.total_amount);

        Ok(())
    }

    #[tokio::test]
    async fn update_status_unknown_order_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .orders
            .update_status(OrderUuid::new(), OrderStatus::Cancelled)
            .await;

        assert!(
            matches!(result, Err(OrdersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}

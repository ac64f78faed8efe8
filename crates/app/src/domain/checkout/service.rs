//! Checkout service.
//!
//! The data-mutating steps are ordered deliberately: the order and its lines
//! commit first in one transaction, and the consumed cart lines are deleted
//! afterwards in a second one. A drain interrupted between the two leaves at
//! worst a stale cart line; the reverse order could lose a cart with no
//! compensating order. Concurrent checkouts by one owner are not mutually
//! excluded; both may snapshot the same cart.

use async_trait::async_trait;
use mockall::automock;
use tracing::{debug, error, info, warn};

use crate::{
    auth::models::AuthenticatedUser,
    database::Db,
    domain::{
        carts::repository::PgCartLinesRepository,
        checkout::{
            errors::CheckoutError,
            models::{CheckoutReceipt, CheckoutRequest},
            validation,
        },
        orders::{
            models::{OrderStatus, OrderUuid},
            repository::PgOrdersRepository,
        },
        users::{models::UserUuid, repository::PgUsersRepository},
    },
    notifications::{NotificationDispatcher, NotificationOutcome},
};

#[derive(Debug, Clone)]
pub struct PgCheckoutService {
    db: Db,
    users: PgUsersRepository,
    cart_lines: PgCartLinesRepository,
    orders: PgOrdersRepository,
    notifier: NotificationDispatcher,
}

impl PgCheckoutService {
    #[must_use]
    pub fn new(db: Db, notifier: NotificationDispatcher) -> Self {
        let users = PgUsersRepository::new(db.pool().clone());

        Self {
            db,
            users,
            cart_lines: PgCartLinesRepository::new(),
            orders: PgOrdersRepository::new(),
            notifier,
        }
    }
}

#[async_trait]
impl CheckoutService for PgCheckoutService {
    async fn place_order(
        &self,
        identity: &AuthenticatedUser,
        request: CheckoutRequest,
    ) -> Result<CheckoutReceipt, CheckoutError> {
        validation::validate(&request)?;

        let owner_uuid = resolve_owner(identity, &request)?;

        let confirmation_address = request
            .email
            .clone()
            .unwrap_or_else(|| identity.email.clone());

        let owner = self
            .users
            .get_user(owner_uuid)
            .await
            .map_err(CheckoutError::Persistence)?
            .ok_or(CheckoutError::NotFound)?;

        // Snapshot and materialize in one transaction: the total and every
        // line price come from the same read, never a re-fetch.
        let mut tx = self.db.begin().await.map_err(CheckoutError::Persistence)?;

        let snapshot = self
            .cart_lines
            .get_cart_lines(&mut tx, owner_uuid)
            .await
            .map_err(CheckoutError::Persistence)?;

        if snapshot.is_empty() {
            debug!(owner = %owner_uuid, "checkout rejected: cart is empty");

            return Err(CheckoutError::EmptyCart);
        }

        let total_amount = snapshot
            .iter()
            .map(|line| u64::from(line.quantity) * line.unit_price)
            .sum();

        let order = self
            .orders
            .create_order(
                &mut tx,
                OrderUuid::new(),
                owner_uuid,
                total_amount,
                OrderStatus::Pending,
            )
            .await
            .map_err(CheckoutError::Persistence)?;

        let lines = self
            .orders
            .create_order_lines(&mut tx, order.uuid, &snapshot)
            .await
            .map_err(CheckoutError::Persistence)?;

        tx.commit().await.map_err(CheckoutError::Persistence)?;

        info!(
            order = %order.uuid,
            owner = %owner_uuid,
            total_amount,
            line_count = lines.len(),
            "order committed"
        );

        // Drain strictly after the commit above.
        let mut tx = self.db.begin().await.map_err(CheckoutError::Persistence)?;

        let books: Vec<uuid::Uuid> = snapshot
            .iter()
            .map(|line| line.book_uuid.into_uuid())
            .collect();

        self.cart_lines
            .drain_cart_lines(&mut tx, owner_uuid, &books)
            .await
            .map_err(CheckoutError::Persistence)?;

        tx.commit().await.map_err(CheckoutError::Persistence)?;

        let outcome = self
            .notifier
            .send_order_confirmation(&owner, &order, &lines, &confirmation_address)
            .await;

        match outcome {
            NotificationOutcome::AllDelivered => {
                info!(order = %order.uuid, "order confirmation delivered to all recipients");
            }
            NotificationOutcome::Partial => {
                warn!(order = %order.uuid, "order confirmation delivered to only one recipient");
            }
            NotificationOutcome::NoneDelivered => {
                error!(order = %order.uuid, "order confirmation could not be delivered");
            }
        }

        Ok(CheckoutReceipt {
            order_uuid: order.uuid,
            total_amount: order.total_amount,
            placed_at: order.created_at,
        })
    }
}

/// Resolve the effective owner of the checkout.
///
/// An explicit identity in the request is compared against the authenticated
/// caller before any lookup, so a mismatching target fails the same way
/// whether or not it exists. The email comparison only applies when no
/// explicit UUID was given; otherwise the email is purely the confirmation
/// override.
fn resolve_owner(
    identity: &AuthenticatedUser,
    request: &CheckoutRequest,
) -> Result<UserUuid, CheckoutError> {
    if let Some(target) = request.user_uuid {
        if target != identity.uuid {
            return Err(CheckoutError::AuthorizationMismatch);
        }
    } else if let Some(email) = &request.email {
        if email != &identity.email {
            return Err(CheckoutError::AuthorizationMismatch);
        }
    }

    Ok(identity.uuid)
}

#[automock]
#[async_trait]
pub trait CheckoutService: Send + Sync {
    /// Convert the caller's cart into a pending order.
    async fn place_order(
        &self,
        identity: &AuthenticatedUser,
        request: CheckoutRequest,
    ) -> Result<CheckoutReceipt, CheckoutError>;
}

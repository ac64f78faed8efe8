//! Cart Lines Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};
use uuid::Uuid;

use crate::domain::{
    books::models::BookUuid,
    carts::models::CartLine,
    try_get_amount, try_get_quantity, try_into_quantity,
    users::models::UserUuid,
};

const GET_CART_LINES_SQL: &str = include_str!("sql/get_cart_lines.sql");
const GET_CART_LINE_SQL: &str = include_str!("sql/get_cart_line.sql");
const ADD_CART_LINE_SQL: &str = include_str!("sql/add_cart_line.sql");
const SET_CART_LINE_SQL: &str = include_str!("sql/set_cart_line.sql");
const DELETE_CART_LINE_SQL: &str = include_str!("sql/delete_cart_line.sql");
const DRAIN_CART_LINES_SQL: &str = include_str!("sql/drain_cart_lines.sql");
const CLEAR_CART_SQL: &str = include_str!("sql/clear_cart.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartLinesRepository;

impl PgCartLinesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_cart_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: UserUuid,
    ) -> Result<Vec<CartLine>, sqlx::Error> {
        query_as::<Postgres, CartLine>(GET_CART_LINES_SQL)
            .bind(owner.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_cart_line(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: UserUuid,
        book: BookUuid,
    ) -> Result<CartLine, sqlx::Error> {
        query_as::<Postgres, CartLine>(GET_CART_LINE_SQL)
            .bind(owner.into_uuid())
            .bind(book.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Insert a line, or add to the quantity of an existing (owner, book)
    /// pair. Returns `None` when the book does not exist.
    pub(crate) async fn add_cart_line(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: UserUuid,
        book: BookUuid,
        quantity: u32,
    ) -> Result<Option<Uuid>, sqlx::Error> {
        query_scalar(ADD_CART_LINE_SQL)
            .bind(owner.into_uuid())
            .bind(book.into_uuid())
            .bind(try_into_quantity(quantity, "quantity")?)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Insert a line, or overwrite the quantity of an existing (owner, book)
    /// pair. Returns `None` when the book does not exist.
    pub(crate) async fn set_cart_line(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: UserUuid,
        book: BookUuid,
        quantity: u32,
    ) -> Result<Option<Uuid>, sqlx::Error> {
        query_scalar(SET_CART_LINE_SQL)
            .bind(owner.into_uuid())
            .bind(book.into_uuid())
            .bind(try_into_quantity(quantity, "quantity")?)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn delete_cart_line(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: UserUuid,
        book: BookUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CART_LINE_SQL)
            .bind(owner.into_uuid())
            .bind(book.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    /// Delete exactly the given (owner, book) pairs. Pairs already gone are
    /// skipped, so a drain interrupted earlier can be safely repeated.
    pub(crate) async fn drain_cart_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: UserUuid,
        books: &[Uuid],
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DRAIN_CART_LINES_SQL)
            .bind(owner.into_uuid())
            .bind(books)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn clear_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: UserUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(CLEAR_CART_SQL)
            .bind(owner.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for CartLine {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            book_uuid: BookUuid::from_uuid(row.try_get("book_uuid")?),
            title: row.try_get("title")?,
            unit_price: try_get_amount(row, "unit_price")?,
            quantity: try_get_quantity(row, "quantity")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

//! Books Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::{
    books::models::{Book, BookFilter, BookUpdate, BookUuid, NewBook},
    try_get_amount, try_get_quantity, try_into_amount, try_into_quantity,
};

const LIST_BOOKS_SQL: &str = include_str!("sql/list_books.sql");
const GET_BOOK_SQL: &str = include_str!("sql/get_book.sql");
const CREATE_BOOK_SQL: &str = include_str!("sql/create_book.sql");
const UPDATE_BOOK_SQL: &str = include_str!("sql/update_book.sql");
const DELETE_BOOK_SQL: &str = include_str!("sql/delete_book.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgBooksRepository;

impl PgBooksRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_books(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: &BookFilter,
    ) -> Result<Vec<Book>, sqlx::Error> {
        query_as::<Postgres, Book>(LIST_BOOKS_SQL)
            .bind(filter.category.as_deref())
            .bind(filter.search.as_deref())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_book(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        book: BookUuid,
    ) -> Result<Book, sqlx::Error> {
        query_as::<Postgres, Book>(GET_BOOK_SQL)
            .bind(book.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_book(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        book: NewBook,
    ) -> Result<Book, sqlx::Error> {
        query_as::<Postgres, Book>(CREATE_BOOK_SQL)
            .bind(book.uuid.into_uuid())
            .bind(&book.title)
            .bind(&book.author)
            .bind(&book.category)
            .bind(&book.description)
            .bind(try_into_amount(book.price, "price")?)
            .bind(try_into_quantity(book.stock, "stock")?)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_book(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        book: BookUuid,
        update: BookUpdate,
    ) -> Result<Book, sqlx::Error> {
        query_as::<Postgres, Book>(UPDATE_BOOK_SQL)
            .bind(book.into_uuid())
            .bind(&update.title)
            .bind(&update.author)
            .bind(&update.category)
            .bind(&update.description)
            .bind(try_into_amount(update.price, "price")?)
            .bind(try_into_quantity(update.stock, "stock")?)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_book(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        book: BookUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_BOOK_SQL)
            .bind(book.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for Book {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: BookUuid::from_uuid(row.try_get("uuid")?),
            title: row.try_get("title")?,
            author: row.try_get("author")?,
            category: row.try_get("category")?,
            description: row.try_get("description")?,
            price: try_get_amount(row, "price")?,
            stock: try_get_quantity(row, "stock")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

//! Cart Models

use jiff::Timestamp;

use crate::domain::books::models::BookUuid;

/// Cart Line Model
///
/// One line per (owner, book) pair. `unit_price` and `title` are joined in
/// from the catalog at read time; the stored row holds only the quantity.
#[derive(Debug, Clone)]
pub struct CartLine {
    pub book_uuid: BookUuid,
    pub title: String,
    pub unit_price: u64,
    pub quantity: u32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// New Cart Line Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewCartLine {
    pub book_uuid: BookUuid,
    pub quantity: u32,
}

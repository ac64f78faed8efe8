//! Book Models

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Book UUID
pub type BookUuid = TypedUuid<Book>;

/// Book Model
#[derive(Debug, Clone)]
pub struct Book {
    pub uuid: BookUuid,
    pub title: String,
    pub author: String,
    pub category: String,
    pub description: String,
    /// Current catalog price in minor currency units.
    pub price: u64,
    pub stock: u32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// New Book Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewBook {
    pub uuid: BookUuid,
    pub title: String,
    pub author: String,
    pub category: String,
    pub description: String,
    pub price: u64,
    pub stock: u32,
}

/// Book Update Model
#[derive(Debug, Clone, PartialEq)]
pub struct BookUpdate {
    pub title: String,
    pub author: String,
    pub category: String,
    pub description: String,
    pub price: u64,
    pub stock: u32,
}

/// Catalog browse filter. Empty filter lists everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookFilter {
    pub category: Option<String>,
    /// Case-insensitive substring match over title and author.
    pub search: Option<String>,
}

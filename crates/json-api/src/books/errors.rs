//! Errors

use bookstore_app::domain::books::BooksServiceError;
use salvo::http::StatusError;
use tracing::error;

pub(crate) fn into_status_error(error: BooksServiceError) -> StatusError {
    match error {
        BooksServiceError::AlreadyExists => StatusError::conflict().brief("Book already exists"),
        BooksServiceError::InvalidReference
        | BooksServiceError::MissingRequiredData
        | BooksServiceError::InvalidData
        | BooksServiceError::InvalidPrice(_) => {
            StatusError::bad_request().brief("Invalid book payload")
        }
        BooksServiceError::NotFound => StatusError::not_found().brief("Book not found"),
        BooksServiceError::Sql(source) => {
            error!("books storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}

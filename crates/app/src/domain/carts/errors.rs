//! Carts service errors.

use thiserror::Error;

use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("cart not found")]
    NotFound,

    #[error("access not found")]
    AccessNotFound,

    #[error("user already has access to this cart")]
    DuplicateAccess,

    #[error("missing required cart fields")]
    MissingRequiredData,

    #[error("storage error")]
    Storage(#[from] StorageError),
}

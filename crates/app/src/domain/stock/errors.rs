//! Default-stock service errors.

use thiserror::Error;

use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum StockServiceError {
    #[error("default stock must contain at least one drawer")]
    InvalidTemplate,

    #[error("storage error")]
    Storage(#[from] StorageError),
}

//! Floor board service errors.

use thiserror::Error;

use crate::domain::carts::CartsServiceError;

#[derive(Debug, Error)]
pub enum FloorsServiceError {
    #[error("floor outside the board range")]
    UnknownFloor,

    #[error("no cart registered on this floor")]
    EmptyFloor,

    #[error(transparent)]
    Carts(#[from] CartsServiceError),
}

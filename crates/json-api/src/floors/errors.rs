//! Errors

use salvo::http::StatusError;

use crashcart_app::domain::floors::FloorsServiceError;

use crate::carts;

pub(crate) fn into_status_error(error: FloorsServiceError) -> StatusError {
    match error {
        FloorsServiceError::UnknownFloor => {
            StatusError::not_found().brief("Floor outside the board range")
        }
        FloorsServiceError::EmptyFloor => {
            StatusError::not_found().brief("No cart registered on this floor")
        }
        FloorsServiceError::Carts(source) => carts::errors::into_status_error(source),
    }
}

//! Errors

use salvo::http::StatusError;
use tracing::error;

use crashcart_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::NotFound => StatusError::not_found().brief("Cart not found"),
        CartsServiceError::AccessNotFound => StatusError::not_found().brief("Access not found"),
        CartsServiceError::DuplicateAccess => {
            StatusError::conflict().brief("User already has access to this cart")
        }
        CartsServiceError::MissingRequiredData => {
            StatusError::bad_request().brief("Missing required cart fields")
        }
        CartsServiceError::Storage(source) => {
            error!("cart storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}

//! Errors

use salvo::http::StatusError;
use tracing::error;

use crashcart_app::domain::stock::StockServiceError;

pub(crate) fn into_status_error(error: StockServiceError) -> StatusError {
    match error {
        StockServiceError::InvalidTemplate => {
            StatusError::bad_request().brief("Default stock must contain at least one drawer")
        }
        StockServiceError::Storage(source) => {
            error!("default stock storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}

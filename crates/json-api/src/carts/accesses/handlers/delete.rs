//! Revoke Access Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Revoke Access Handler
#[endpoint(
    tags("accesses"),
    summary = "Revoke Access",
    responses(
        (status_code = StatusCode::OK, description = "Access revoked"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart or access not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    user: PathParam<String>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .carts
        .remove_access(cart.into_inner(), user.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}

//! Floor Status Cycle Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*, floors::errors::into_status_error, models::CartResponse, state::State,
};

/// Floor Status Cycle Handler
///
/// A tap on a floor card advances its first cart one step along the
/// `aberto -> fechado -> estoque -> aberto` cycle and persists the change.
#[endpoint(
    tags("floors"),
    summary = "Cycle Floor Status",
    responses(
        (status_code = StatusCode::OK, description = "Cart status advanced"),
        (status_code = StatusCode::NOT_FOUND, description = "Floor empty or outside the board"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "floors.cycle", skip(floor, depot), err)]
pub(crate) async fn handler(
    floor: PathParam<usize>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let floor = floor.into_inner();

    let cart = state
        .app
        .floors
        .cycle_status(floor)
        .await
        .map_err(into_status_error)?;

    tracing::info!(floor, cart = %cart.id, status = ?cart.status, "cycled floor status");

    Ok(Json(cart.into()))
}

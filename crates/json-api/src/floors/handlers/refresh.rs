//! Floor Board Refresh Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    floors::{errors::into_status_error, index::FloorsResponse},
    state::State,
};

/// Floor Board Refresh Handler
///
/// Reloads carts from storage, regroups them by floor and restarts every
/// rotation. Called by the wall display when it (re)loads.
#[endpoint(
    tags("floors"),
    summary = "Refresh Floor Board",
    responses(
        (status_code = StatusCode::OK, description = "Board rebuilt from storage"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<FloorsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let views = state
        .app
        .floors
        .refresh()
        .await
        .map_err(into_status_error)?;

    Ok(Json(FloorsResponse::from_views(views)))
}

//! Update Access Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    carts::errors::into_status_error, extensions::*, models::AccessResponse, state::State,
};

/// Update Access Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateAccessRequest {
    /// Replacement permission label
    pub permission: String,
}

/// Update Access Handler
#[endpoint(
    tags("accesses"),
    summary = "Update Access",
    responses(
        (status_code = StatusCode::OK, description = "Access updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart or access not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    user: PathParam<String>,
    json: JsonBody<UpdateAccessRequest>,
    depot: &mut Depot,
) -> Result<Json<AccessResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let access = state
        .app
        .carts
        .update_access(
            cart.into_inner(),
            user.into_inner(),
            json.into_inner().permission,
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(access.into()))
}

//! Grant Access Handler

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

use crashcart_app::domain::carts::data::NewAccess;

use crate::{
    carts::errors::into_status_error, extensions::*, models::AccessResponse, state::State,
};

/// Grant Access Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateAccessRequest {
    /// The user to grant access to
    pub user_id: String,

    /// Free-form permission label
    pub permission: String,
}

impl From<CreateAccessRequest> for NewAccess {
    fn from(request: CreateAccessRequest) -> Self {
        NewAccess {
            user_id: request.user_id,
            permission: request.permission,
        }
    }
}

/// Grant Access Handler
///
/// A cart holds at most one grant per user; duplicates are rejected.
#[endpoint(
    tags("accesses"),
    summary = "Grant Access",
    responses(
        (status_code = StatusCode::CREATED, description = "Access granted"),
        (status_code = StatusCode::CONFLICT, description = "User already has access"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    json: JsonBody<CreateAccessRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<AccessResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let access = state
        .app
        .carts
        .add_access(cart.into_inner(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(access.into()))
}

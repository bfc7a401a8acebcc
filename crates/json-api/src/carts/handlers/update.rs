//! Update Cart Handler

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

use crashcart_app::domain::carts::data::CartUpdate;

use crate::{
    carts::errors::into_status_error,
    extensions::*,
    models::{CartResponse, CartStatusBody, DrawerBody},
    state::State,
};

/// Update Cart Request
///
/// Partial update: only the provided fields are merged into the record.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateCartRequest {
    /// New display name
    #[serde(default)]
    pub name: Option<String>,

    /// New location
    #[serde(default)]
    pub location: Option<String>,

    /// New operational status
    #[serde(default)]
    pub status: Option<CartStatusBody>,

    /// Replacement drawer set
    #[serde(default)]
    pub drawers: Option<Vec<DrawerBody>>,
}

impl From<UpdateCartRequest> for CartUpdate {
    fn from(request: UpdateCartRequest) -> Self {
        CartUpdate {
            name: request.name,
            location: request.location,
            status: request.status.map(Into::into),
            drawers: request
                .drawers
                .map(|drawers| drawers.into_iter().map(Into::into).collect()),
        }
    }
}

/// Update Cart Handler
#[endpoint(
    tags("carts"),
    summary = "Update Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "carts.update", skip(cart, json, depot), err)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    json: JsonBody<UpdateCartRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let cart = cart.into_inner();

    let updated = state
        .app
        .carts
        .update_cart(cart, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(cart = %cart, "updated cart");

    Ok(Json(updated.into()))
}

//! Update Default Stock Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crashcart::stock::StockTemplate;

use crate::{
    extensions::*, models::DrawerBody, state::State, stock::errors::into_status_error,
};

/// Update Default Stock Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateTemplateRequest {
    /// Replacement drawer layout
    pub drawers: Vec<DrawerBody>,
}

impl From<UpdateTemplateRequest> for StockTemplate {
    fn from(request: UpdateTemplateRequest) -> Self {
        StockTemplate {
            drawers: request.drawers.into_iter().map(Into::into).collect(),
        }
    }
}

/// Default Stock Updated Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TemplateUpdatedResponse {
    /// How many existing carts were re-synced against the new template
    pub carts_synced: usize,
}

/// Update Default Stock Handler
///
/// Replaces the template and re-syncs every existing cart's matching
/// drawer/item quantities against it in the same request.
#[endpoint(
    tags("default-stock"),
    summary = "Update Default Stock",
    responses(
        (status_code = StatusCode::OK, description = "Default stock replaced and carts re-synced"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "stock.update", skip(json, depot), err)]
pub(crate) async fn handler(
    json: JsonBody<UpdateTemplateRequest>,
    depot: &mut Depot,
) -> Result<Json<TemplateUpdatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let synced = state
        .app
        .stock
        .update_template(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(carts_synced = synced.len(), "replaced default stock");

    Ok(Json(TemplateUpdatedResponse {
        carts_synced: synced.len(),
    }))
}

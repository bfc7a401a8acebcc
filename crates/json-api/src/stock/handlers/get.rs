//! Get Default Stock Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crashcart::stock::StockTemplate;

use crate::{
    extensions::*, models::DrawerBody, state::State, stock::errors::into_status_error,
};

/// Default Stock Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TemplateResponse {
    /// Drawers in template order
    pub drawers: Vec<DrawerBody>,
}

impl From<StockTemplate> for TemplateResponse {
    fn from(template: StockTemplate) -> Self {
        Self {
            drawers: template.drawers.into_iter().map(Into::into).collect(),
        }
    }
}

/// Get Default Stock Handler
///
/// Returns the drawer layout new carts start from.
#[endpoint(tags("default-stock"), summary = "Get Default Stock")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<TemplateResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let template = state
        .app
        .stock
        .get_template()
        .await
        .map_err(into_status_error)?;

    Ok(Json(template.into()))
}

//! Floor Board Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crashcart_app::domain::floors::models::{DisplayedCart, FloorView};

use crate::{
    extensions::*,
    models::{CartStatusBody, FloorStatusBody},
    state::State,
};

/// Displayed Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DisplayedCartResponse {
    /// The cart currently in view
    pub id: Uuid,

    /// Its display name
    pub name: String,

    /// Its own operational status, if ever set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CartStatusBody>,
}

impl From<DisplayedCart> for DisplayedCartResponse {
    fn from(cart: DisplayedCart) -> Self {
        Self {
            id: cart.id,
            name: cart.name,
            status: cart.status.map(Into::into),
        }
    }
}

/// Floor Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct FloorResponse {
    /// 1-based floor number
    pub floor: usize,

    /// Aggregated display status
    pub status: FloorStatusBody,

    /// Name shown on the floor card
    pub display_name: String,

    /// How many carts are mapped onto the floor
    pub cart_count: usize,

    /// The cart currently rotated into view, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub displayed: Option<DisplayedCartResponse>,
}

impl From<FloorView> for FloorResponse {
    fn from(view: FloorView) -> Self {
        Self {
            floor: view.floor,
            status: view.status.into(),
            display_name: view.display_name,
            cart_count: view.cart_count,
            displayed: view.displayed.map(Into::into),
        }
    }
}

/// Floors Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct FloorsResponse {
    /// One entry per floor, ground floor first
    pub floors: Vec<FloorResponse>,
}

impl FloorsResponse {
    pub(crate) fn from_views(views: Vec<FloorView>) -> Self {
        Self {
            floors: views.into_iter().map(Into::into).collect(),
        }
    }
}

/// Floor Board Index Handler
///
/// Returns the current board snapshot the wall display renders.
#[endpoint(tags("floors"), summary = "Get Floor Board")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<FloorsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let views = state.app.floors.board().await;

    Ok(Json(FloorsResponse::from_views(views)))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crashcart::status::{CartStatus, FloorStatus};
    use crashcart_app::domain::floors::MockFloorsService;

    use crate::test_helpers::floors_service;

    use super::*;

    fn make_views() -> Vec<FloorView> {
        vec![
            FloorView {
                floor: 1,
                status: FloorStatus::Empty,
                display_name: "(Vazio)".to_string(),
                cart_count: 0,
                displayed: None,
            },
            FloorView {
                floor: 2,
                status: FloorStatus::Open,
                display_name: "Carrinho 2A".to_string(),
                cart_count: 2,
                displayed: Some(DisplayedCart {
                    id: Uuid::now_v7(),
                    name: "Carrinho 2B".to_string(),
                    status: Some(CartStatus::Closed),
                }),
            },
        ]
    }

    fn make_service(repo: MockFloorsService) -> Service {
        floors_service(repo, Router::with_path("floors").get(handler))
    }

    #[tokio::test]
    async fn index_returns_the_board_snapshot() -> TestResult {
        let mut repo = MockFloorsService::new();

        repo.expect_board().once().return_once(make_views);

        repo.expect_refresh().never();
        repo.expect_cycle_status().never();

        let response: FloorsResponse = TestClient::get("http://example.com/floors")
            .send(&make_service(repo))
            .await
            .take_json()
            .await?;

        assert_eq!(response.floors.len(), 2);
        assert_eq!(response.floors[0].status, FloorStatusBody::Empty);
        assert_eq!(response.floors[0].display_name, "(Vazio)");
        assert_eq!(response.floors[1].status, FloorStatusBody::Open);
        assert_eq!(
            response.floors[1].displayed.as_ref().map(|c| c.name.as_str()),
            Some("Carrinho 2B")
        );

        Ok(())
    }
}

//! Create Cart Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crashcart_app::domain::carts::data::NewCart;

use crate::{
    carts::errors::into_status_error, extensions::*, models::CartStatusBody, state::State,
};

/// Create Cart Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateCartRequest {
    /// Display name
    pub name: String,

    /// Free-text location containing the floor number
    pub location: String,

    /// Initial operational status
    #[serde(default)]
    pub status: Option<CartStatusBody>,
}

impl From<CreateCartRequest> for NewCart {
    fn from(request: CreateCartRequest) -> Self {
        NewCart {
            name: request.name,
            location: request.location,
            status: request.status.map(Into::into),
        }
    }
}

/// Cart Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartCreatedResponse {
    /// Created cart id
    pub id: Uuid,
}

/// Create Cart Handler
///
/// The new cart's drawers are copied from the current default stock.
#[endpoint(
    tags("carts"),
    summary = "Create Cart",
    responses(
        (status_code = StatusCode::CREATED, description = "Cart created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateCartRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let id = state
        .app
        .carts
        .create_cart(json.into_inner().into())
        .await
        .map_err(into_status_error)?
        .id;

    res.add_header(LOCATION, format!("/carts/{id}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(CartCreatedResponse { id }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use crashcart::status::CartStatus;
    use crashcart_app::domain::carts::{CartsServiceError, MockCartsService};

    use crate::test_helpers::{carts_service, make_cart};

    use super::*;

    fn make_service(repo: MockCartsService) -> Service {
        carts_service(repo, Router::with_path("carts").post(handler))
    }

    #[tokio::test]
    async fn create_cart_returns_201_with_location() -> TestResult {
        let uuid = Uuid::now_v7();
        let cart = make_cart(uuid);

        let mut repo = MockCartsService::new();

        repo.expect_create_cart()
            .once()
            .withf(|new| {
                *new == NewCart {
                    name: "Carrinho 5A".to_string(),
                    location: "5º andar".to_string(),
                    status: Some(CartStatus::Closed),
                }
            })
            .return_once(move |_| Ok(cart));

        repo.expect_get_cart().never();
        repo.expect_delete_cart().never();

        let mut res = TestClient::post("http://example.com/carts")
            .json(&json!({
                "name": "Carrinho 5A",
                "location": "5º andar",
                "status": "fechado",
            }))
            .send(&make_service(repo))
            .await;

        let body: CartCreatedResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/carts/{uuid}").as_str()));
        assert_eq!(body.id, uuid);

        Ok(())
    }

    #[tokio::test]
    async fn create_cart_without_status_defaults_to_none() -> TestResult {
        let uuid = Uuid::now_v7();
        let cart = make_cart(uuid);

        let mut repo = MockCartsService::new();

        repo.expect_create_cart()
            .once()
            .withf(|new| new.status.is_none())
            .return_once(move |_| Ok(cart));

        let res = TestClient::post("http://example.com/carts")
            .json(&json!({ "name": "Carrinho 5A", "location": "5º andar" }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn create_cart_blank_fields_return_400() -> TestResult {
        let mut repo = MockCartsService::new();

        repo.expect_create_cart()
            .once()
            .return_once(|_| Err(CartsServiceError::MissingRequiredData));

        let res = TestClient::post("http://example.com/carts")
            .json(&json!({ "name": "", "location": "5º andar" }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn create_cart_missing_body_fields_return_400() -> TestResult {
        let mut repo = MockCartsService::new();

        repo.expect_create_cart().never();

        let res = TestClient::post("http://example.com/carts")
            .json(&json!({ "name": "Carrinho 5A" }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}

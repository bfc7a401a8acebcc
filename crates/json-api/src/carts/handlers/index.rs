//! Cart Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, models::CartResponse, state::State};

/// Carts Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartsResponse {
    /// The list of carts
    pub carts: Vec<CartResponse>,
}

/// Cart Index Handler
///
/// Returns every registered cart.
#[endpoint(tags("carts"), summary = "List Carts")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let carts = state
        .app
        .carts
        .list_carts()
        .await
        .or_500("failed to fetch carts")?;

    Ok(Json(CartsResponse {
        carts: carts.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;
    use uuid::Uuid;

    use crashcart_app::domain::carts::{CartsServiceError, MockCartsService};

    use crate::test_helpers::{carts_service, make_cart, storage_error};

    use super::*;

    fn make_service(repo: MockCartsService) -> Service {
        carts_service(repo, Router::with_path("carts").get(handler))
    }

    #[tokio::test]
    async fn index_returns_empty_list() -> TestResult {
        let mut repo = MockCartsService::new();

        repo.expect_list_carts().once().return_once(|| Ok(vec![]));

        repo.expect_get_cart().never();
        repo.expect_create_cart().never();

        let response: CartsResponse = TestClient::get("http://example.com/carts")
            .send(&make_service(repo))
            .await
            .take_json()
            .await?;

        assert!(response.carts.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn index_returns_carts_in_storage_order() -> TestResult {
        let uuid_a = Uuid::now_v7();
        let uuid_b = Uuid::now_v7();

        let mut repo = MockCartsService::new();

        repo.expect_list_carts()
            .once()
            .return_once(move || Ok(vec![make_cart(uuid_a), make_cart(uuid_b)]));

        let response: CartsResponse = TestClient::get("http://example.com/carts")
            .send(&make_service(repo))
            .await
            .take_json()
            .await?;

        assert_eq!(response.carts.len(), 2, "expected two carts");
        assert_eq!(response.carts[0].id, uuid_a);
        assert_eq!(response.carts[1].id, uuid_b);

        Ok(())
    }

    #[tokio::test]
    async fn index_storage_failure_returns_500() -> TestResult {
        let mut repo = MockCartsService::new();

        repo.expect_list_carts()
            .once()
            .return_once(|| Err(CartsServiceError::Storage(storage_error())));

        let res = TestClient::get("http://example.com/carts")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}

//! Default-stock service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crashcart::{carts::Cart, stock::StockTemplate, sync::sync_carts};

use crate::{domain::stock::errors::StockServiceError, storage::JsonStore};

#[derive(Debug, Clone)]
pub struct JsonStockService {
    store: Arc<JsonStore>,
}

impl JsonStockService {
    #[must_use]
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl StockService for JsonStockService {
    async fn get_template(&self) -> Result<StockTemplate, StockServiceError> {
        Ok(self.store.load_template().await?)
    }

    async fn update_template(
        &self,
        template: StockTemplate,
    ) -> Result<Vec<Cart>, StockServiceError> {
        if template.drawers.is_empty() {
            return Err(StockServiceError::InvalidTemplate);
        }

        // Two-phase write: template first, then the cart fan-out. Not
        // transactional — a cart-phase failure leaves the template ahead of
        // stale carts, and the caller retries the whole operation.
        self.store.save_template(&template).await?;

        let carts = self.store.load_carts().await?;
        let carts = sync_carts(&template, carts);

        self.store.save_carts(&carts).await?;

        info!(carts = carts.len(), "replaced default stock and re-synced carts");

        Ok(carts)
    }
}

#[automock]
#[async_trait]
pub trait StockService: Send + Sync {
    /// The current default-stock template. Missing storage reads as an
    /// empty template.
    async fn get_template(&self) -> Result<StockTemplate, StockServiceError>;

    /// Replace the template and fan the new quantities out to every
    /// existing cart, returning the re-synced carts.
    async fn update_template(
        &self,
        template: StockTemplate,
    ) -> Result<Vec<Cart>, StockServiceError>;
}

//! App Context

use std::{path::PathBuf, sync::Arc};

use crate::{
    domain::{
        carts::{CartsService, JsonCartsService},
        floors::{BoardFloorsService, FloorsService},
        stock::{JsonStockService, StockService},
    },
    storage::JsonStore,
};

#[derive(Clone)]
pub struct AppContext {
    pub carts: Arc<dyn CartsService>,
    pub stock: Arc<dyn StockService>,
    pub floors: Arc<dyn FloorsService>,
}

impl AppContext {
    /// Build application context over a flat-file data directory.
    #[must_use]
    pub fn from_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        let store = Arc::new(JsonStore::new(data_dir));
        let carts: Arc<dyn CartsService> = Arc::new(JsonCartsService::new(Arc::clone(&store)));

        Self {
            stock: Arc::new(JsonStockService::new(store)),
            floors: Arc::new(BoardFloorsService::new(Arc::clone(&carts))),
            carts,
        }
    }

    /// Assemble a context from already-built services. Used by handler
    /// tests to wire in mocks.
    #[must_use]
    pub fn from_services(
        carts: Arc<dyn CartsService>,
        stock: Arc<dyn StockService>,
        floors: Arc<dyn FloorsService>,
    ) -> Self {
        Self {
            carts,
            stock,
            floors,
        }
    }
}

//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use crashcart::{
    carts::{Access, Cart},
    status::CartStatus,
    stock::{Drawer, Item, StockTemplate},
};
use crashcart_app::{
    context::AppContext,
    domain::{carts::MockCartsService, floors::MockFloorsService, stock::MockStockService},
    storage::StorageError,
};

use crate::state::State;

pub(crate) fn make_cart(id: Uuid) -> Cart {
    Cart {
        id,
        name: "Carrinho 5A".to_string(),
        location: "5º andar".to_string(),
        status: Some(CartStatus::Closed),
        drawers: make_template().drawers,
        accesses: Vec::new(),
    }
}

pub(crate) fn make_access(user_id: &str, permission: &str) -> Access {
    Access {
        user_id: user_id.to_string(),
        permission: permission.to_string(),
        added_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn storage_error() -> StorageError {
    StorageError::Io(std::io::Error::other("disk failure"))
}

pub(crate) fn make_template() -> StockTemplate {
    StockTemplate {
        drawers: vec![Drawer {
            id: Some("g1".to_string()),
            name: "Medicamentos".to_string(),
            items: vec![Item {
                id: Some("i1".to_string()),
                name: "Gaze".to_string(),
                quantity: 10,
            }],
        }],
    }
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_list_carts().never();
    carts.expect_get_cart().never();
    carts.expect_create_cart().never();
    carts.expect_update_cart().never();
    carts.expect_delete_cart().never();
    carts.expect_add_access().never();
    carts.expect_update_access().never();
    carts.expect_remove_access().never();

    carts
}

fn strict_stock_mock() -> MockStockService {
    let mut stock = MockStockService::new();

    stock.expect_get_template().never();
    stock.expect_update_template().never();

    stock
}

fn strict_floors_mock() -> MockFloorsService {
    let mut floors = MockFloorsService::new();

    floors.expect_board().never();
    floors.expect_refresh().never();
    floors.expect_tick().never();
    floors.expect_cycle_status().never();

    floors
}

fn make_service(app: AppContext, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::from_app_context(app)))
            .push(route),
    )
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    make_service(
        AppContext::from_services(
            Arc::new(carts),
            Arc::new(strict_stock_mock()),
            Arc::new(strict_floors_mock()),
        ),
        route,
    )
}

pub(crate) fn stock_service(stock: MockStockService, route: Router) -> Service {
    make_service(
        AppContext::from_services(
            Arc::new(strict_carts_mock()),
            Arc::new(stock),
            Arc::new(strict_floors_mock()),
        ),
        route,
    )
}

pub(crate) fn floors_service(floors: MockFloorsService, route: Router) -> Service {
    make_service(
        AppContext::from_services(
            Arc::new(strict_carts_mock()),
            Arc::new(strict_stock_mock()),
            Arc::new(floors),
        ),
        route,
    )
}

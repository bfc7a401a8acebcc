//! Shared service test support.


pub(crate) use context::TestContext;

use crashcart::stock::{Drawer, Item, StockTemplate};

/// A small but realistic default stock: one drawer, two items.
pub(crate) fn sample_template() -> StockTemplate {
    StockTemplate {
        drawers: vec![Drawer {
            id: Some("g1".to_string()),
            name: "Medicamentos".to_string(),
            items: vec![
                Item {
                    id: Some("i1".to_string()),
                    name: "Gaze".to_string(),
                    quantity: 10,
                },
                Item {
                    id: Some("i2".to_string()),
                    name: "Soro".to_string(),
                    quantity: 5,
                },
            ],
        }],
    }
}

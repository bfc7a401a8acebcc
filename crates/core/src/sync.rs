//! Stock template synchronizer
//!
//! Re-synchronizes existing carts against a replacement default-stock
//! template. Matching is by exact drawer and item name; only quantities
//! flow from the template to the carts. Structure never changes in either
//! direction: a drawer or item the template does not know stays as it is,
//! and template entries missing from a cart are not added to it.

use crate::{carts::Cart, stock::StockTemplate};

/// Overwrite the quantities of every cart item that has a template
/// counterpart, matched by drawer name then item name.
///
/// Item `id` and `name` are never touched, so legacy records keep their
/// identity through a sync.
pub fn apply_template(template: &StockTemplate, cart: &mut Cart) {
    for drawer in &mut cart.drawers {
        let Some(template_drawer) = template.drawer_named(&drawer.name) else {
            continue;
        };

        for item in &mut drawer.items {
            if let Some(template_item) = template_drawer.item_named(&item.name) {
                item.quantity = template_item.quantity;
            }
        }
    }
}

/// Apply the template to every cart, preserving input order.
#[must_use]
pub fn sync_carts(template: &StockTemplate, mut carts: Vec<Cart>) -> Vec<Cart> {
    for cart in &mut carts {
        apply_template(template, cart);
    }

    carts
}

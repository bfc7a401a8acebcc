//! Cart Data

use crashcart::{carts::Cart, status::CartStatus, stock::Drawer};

/// New Cart Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCart {
    pub name: String,
    pub location: String,
    pub status: Option<CartStatus>,
}

/// Cart Update Data
///
/// Partial update: only the provided fields are merged into the record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartUpdate {
    pub name: Option<String>,
    pub location: Option<String>,
    pub status: Option<CartStatus>,
    pub drawers: Option<Vec<Drawer>>,
}

impl CartUpdate {
    /// Merge the provided fields into the cart, leaving the rest alone.
    pub fn apply(self, cart: &mut Cart) {
        if let Some(name) = self.name {
            cart.name = name;
        }

        if let Some(location) = self.location {
            cart.location = location;
        }

        if let Some(status) = self.status {
            cart.status = Some(status);
        }

        if let Some(drawers) = self.drawers {
            cart.drawers = drawers;
        }
    }
}

/// New Access Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccess {
    pub user_id: String,
    pub permission: String,
}

//! Shared wire models.
//!
//! The JSON surface keeps the Portuguese status labels the wall display and
//! the stored records use; everything else maps 1:1 onto the core records.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crashcart::{
    carts::{Access, Cart},
    status::{CartStatus, FloorStatus},
    stock::{Drawer, Item},
};

/// Cart operational status on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) enum CartStatusBody {
    /// In use for an emergency or under maintenance.
    #[serde(rename = "aberto")]
    Open,

    /// Complete and ready for use.
    #[serde(rename = "fechado")]
    Closed,

    /// Stock incomplete, needs replenishment.
    #[serde(rename = "estoque")]
    Restock,
}

impl From<CartStatusBody> for CartStatus {
    fn from(status: CartStatusBody) -> Self {
        match status {
            CartStatusBody::Open => Self::Open,
            CartStatusBody::Closed => Self::Closed,
            CartStatusBody::Restock => Self::Restock,
        }
    }
}

impl From<CartStatus> for CartStatusBody {
    fn from(status: CartStatus) -> Self {
        match status {
            CartStatus::Open => Self::Open,
            CartStatus::Closed => Self::Closed,
            CartStatus::Restock => Self::Restock,
        }
    }
}

/// Aggregated floor status on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) enum FloorStatusBody {
    /// At least one cart on the floor is open.
    #[serde(rename = "aberto")]
    Open,

    /// No open cart, but at least one needs restocking.
    #[serde(rename = "estoque")]
    Restock,

    /// Every cart on the floor is closed.
    #[serde(rename = "fechado")]
    Closed,

    /// No cart registered on the floor.
    #[serde(rename = "vazio")]
    Empty,
}

impl From<FloorStatus> for FloorStatusBody {
    fn from(status: FloorStatus) -> Self {
        match status {
            FloorStatus::Open => Self::Open,
            FloorStatus::Restock => Self::Restock,
            FloorStatus::Closed => Self::Closed,
            FloorStatus::Empty => Self::Empty,
        }
    }
}

/// Item Body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct ItemBody {
    /// Record identifier; absent on legacy records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display name, also the template-matching key.
    pub name: String,

    /// Quantity on hand.
    pub quantity: u32,
}

impl From<ItemBody> for Item {
    fn from(item: ItemBody) -> Self {
        Item {
            id: item.id,
            name: item.name,
            quantity: item.quantity,
        }
    }
}

impl From<Item> for ItemBody {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            quantity: item.quantity,
        }
    }
}

/// Drawer Body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct DrawerBody {
    /// Record identifier; absent on legacy records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display name, also the template-matching key.
    pub name: String,

    /// Items in drawer order.
    pub items: Vec<ItemBody>,
}

impl From<DrawerBody> for Drawer {
    fn from(drawer: DrawerBody) -> Self {
        Drawer {
            id: drawer.id,
            name: drawer.name,
            items: drawer.items.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Drawer> for DrawerBody {
    fn from(drawer: Drawer) -> Self {
        Self {
            id: drawer.id,
            name: drawer.name,
            items: drawer.items.into_iter().map(Into::into).collect(),
        }
    }
}

/// Access Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AccessResponse {
    /// The granted user
    pub user_id: String,

    /// Free-form permission label
    pub permission: String,

    /// When the grant was added
    pub added_at: String,
}

impl From<Access> for AccessResponse {
    fn from(access: Access) -> Self {
        Self {
            user_id: access.user_id,
            permission: access.permission,
            added_at: access.added_at.to_string(),
        }
    }
}

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// The unique identifier of the cart
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Free-text location; the floor number is the first run of digits
    pub location: String,

    /// Operational status, if ever set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CartStatusBody>,

    /// Drawers owned by the cart
    pub drawers: Vec<DrawerBody>,

    /// Access grants on the cart
    pub accesses: Vec<AccessResponse>,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            id: cart.id,
            name: cart.name,
            location: cart.location,
            status: cart.status.map(Into::into),
            drawers: cart.drawers.into_iter().map(Into::into).collect(),
            accesses: cart.accesses.into_iter().map(Into::into).collect(),
        }
    }
}

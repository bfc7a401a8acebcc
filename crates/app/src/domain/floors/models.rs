//! Floor board views.

use uuid::Uuid;

use crashcart::status::{CartStatus, FloorStatus};

/// The cart a floor card is currently rotated onto.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayedCart {
    pub id: Uuid,
    pub name: String,
    pub status: Option<CartStatus>,
}

/// Read-only view of one floor on the wall board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorView {
    /// 1-based floor number.
    pub floor: usize,

    /// Aggregated display status for the floor.
    pub status: FloorStatus,

    /// The name shown on the floor card.
    pub display_name: String,

    /// How many carts are mapped onto the floor.
    pub cart_count: usize,

    /// The cart currently in view, if the floor has any.
    pub displayed: Option<DisplayedCart>,
}

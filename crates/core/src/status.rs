//! Cart and floor statuses
//!
//! Wire values are the Portuguese labels the wall display and the stored
//! records use: `aberto` (in use), `fechado` (complete and ready),
//! `estoque` (needs restocking) and, for floors only, `vazio`.

use serde::{Deserialize, Serialize};

/// Operational status of a single cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartStatus {
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

/// Display status of a whole floor.
///
/// Declaration order is priority order: when several carts share a floor the
/// lowest variant wins, so a single open cart turns the whole floor red no
/// matter how many closed carts sit next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FloorStatus {
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

impl FloorStatus {
    /// Numeric priority rank, lowest wins. Kept as a plain mapping so the
    /// ordering is auditable in one place.
    #[must_use]
    pub fn priority(self) -> u8 {
        match self {
            Self::Open => 1,
            Self::Restock => 2,
            Self::Closed => 3,
            Self::Empty => 4,
        }
    }
}

impl From<Option<CartStatus>> for FloorStatus {
    /// How a single cart reads on the floor board. A cart whose status was
    /// never set counts as needing restock.
    fn from(status: Option<CartStatus>) -> Self {
        match status {
            Some(CartStatus::Open) => Self::Open,
            Some(CartStatus::Closed) => Self::Closed,
            Some(CartStatus::Restock) | None => Self::Restock,
        }
    }
}

/// The status a cart moves to when tapped on the wall display.
///
/// The cycle is `aberto -> fechado -> estoque -> aberto`; an unset status is
/// treated as `estoque`, so it advances to `aberto`.
#[must_use]
pub fn next_status(current: Option<CartStatus>) -> CartStatus {
    match current {
        Some(CartStatus::Open) => CartStatus::Closed,
        Some(CartStatus::Closed) => CartStatus::Restock,
        Some(CartStatus::Restock) | None => CartStatus::Open,
    }
}

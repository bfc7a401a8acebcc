//! Cart records

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{status::CartStatus, stock::{Drawer, StockTemplate}};

/// An emergency supply cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    /// Unique, time-ordered identifier assigned at creation.
    pub id: Uuid,

    /// Display name.
    pub name: String,

    /// Free-text location; the floor number is the first run of digits in
    /// this string.
    pub location: String,

    /// Operational status. Absent on records that were never toggled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CartStatus>,

    /// Drawers owned by this cart. Deep-copied from the default-stock
    /// template at creation time; template edits after that point do not
    /// reach the cart unless a sync is run explicitly.
    #[serde(default)]
    pub drawers: Vec<Drawer>,

    /// Access grants, at most one per user.
    #[serde(default)]
    pub accesses: Vec<Access>,
}

impl Cart {
    /// Build a new cart whose drawers are a deep copy of the template's.
    #[must_use]
    pub fn from_template(
        id: Uuid,
        name: String,
        location: String,
        status: Option<CartStatus>,
        template: &StockTemplate,
    ) -> Self {
        Self {
            id,
            name,
            location,
            status,
            drawers: template.drawers.clone(),
            accesses: Vec::new(),
        }
    }

    /// The access grant for the given user, if one exists.
    #[must_use]
    pub fn access_for(&self, user_id: &str) -> Option<&Access> {
        self.accesses.iter().find(|access| access.user_id == user_id)
    }
}

/// A user's access grant on a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Access {
    /// The granted user. Unique within a cart.
    pub user_id: String,

    /// Free-form permission label.
    pub permission: String,

    /// When the grant was added.
    pub added_at: Timestamp,
}

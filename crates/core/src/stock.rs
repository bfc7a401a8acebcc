//! Stock records
//!
//! Items, drawers and the default-stock template. Drawers are owned
//! exclusively by their parent cart or by the template; copying a template
//! into a cart is always a deep copy.

use serde::{Deserialize, Serialize};

/// A single supply item held in a drawer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Record identifier. Legacy records may lack one, in which case the
    /// item is identified by its name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display name, also the template-matching key.
    pub name: String,

    /// Current quantity on hand.
    pub quantity: u32,
}

impl Item {
    /// The resolved identity key: `id` when present, else `name`.
    #[must_use]
    pub fn identity(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.name)
    }
}

/// A named drawer holding an ordered sequence of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drawer {
    /// Record identifier, with the same legacy fallback rule as [`Item`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display name, also the template-matching key.
    pub name: String,

    /// Items in drawer order.
    pub items: Vec<Item>,
}

impl Drawer {
    /// The resolved identity key: `id` when present, else `name`.
    #[must_use]
    pub fn identity(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.name)
    }

    /// First item with exactly the given name, if any.
    #[must_use]
    pub fn item_named(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name == name)
    }
}

/// The default-stock template: the drawer layout every new cart starts from.
///
/// A process-wide singleton record whose lifecycle is independent of any
/// cart. It is always passed explicitly; nothing in this crate holds it as
/// ambient state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockTemplate {
    /// Drawers in template order.
    pub drawers: Vec<Drawer>,
}

impl StockTemplate {
    /// First drawer with exactly the given name, if any.
    #[must_use]
    pub fn drawer_named(&self, name: &str) -> Option<&Drawer> {
        self.drawers.iter().find(|drawer| drawer.name == name)
    }
}

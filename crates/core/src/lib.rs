//! Crashcart
//!
//! Core domain logic for tracking emergency supply carts across the floors
//! of a building: drawer/item stock records, the default-stock template
//! synchronizer, and the per-floor status board with its rotation state.

pub mod carts;
pub mod floors;
pub mod rotation;
pub mod status;
pub mod stock;
pub mod sync;

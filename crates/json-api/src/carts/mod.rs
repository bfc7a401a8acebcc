//! Carts

pub(crate) mod accesses;
pub(crate) mod errors;
mod handlers;

pub(crate) use handlers::*;

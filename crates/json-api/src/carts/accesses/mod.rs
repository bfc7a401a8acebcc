//! Cart Accesses

mod handlers;

pub(crate) use handlers::*;

//! Floor Board

pub mod errors;
pub mod models;
pub mod service;

pub use errors::FloorsServiceError;
pub use service::*;

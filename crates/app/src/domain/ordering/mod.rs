//! Passenger ordering flow

pub mod errors;
pub mod models;
pub mod service;
pub mod session;
pub mod sync;

pub use errors::OrderingError;
pub use models::{CartQuantities, Entry, Tracking};
pub use service::*;
pub use session::OrderingSession;
pub use sync::SyncProtocol;

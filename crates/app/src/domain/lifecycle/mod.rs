//! Order lifecycle enforcement

pub mod errors;
pub mod in_flight;
pub mod service;

pub use errors::LifecycleError;
pub use in_flight::{InFlight, InFlightPermit};
pub use service::{EmptyOrderPolicy, OrderLifecycle};

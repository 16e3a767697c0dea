//! Reservation lookups

pub mod client;
pub mod errors;
pub mod models;

pub use client::*;
pub use errors::ReservationError;
pub use models::{Journey, JourneyDetails, Station, serving_stations};

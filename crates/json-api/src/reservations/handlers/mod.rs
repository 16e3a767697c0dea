//! Reservation Handlers

pub(crate) mod get;

//! Railmeal Domain Concerns

pub mod lifecycle;
pub mod menu;
pub mod ordering;
pub mod orders;
pub mod reservations;

//! Railmeal
//!
//! Railmeal is the cart and order lifecycle engine behind on-train food ordering: a passenger,
//! identified by their PNR, fills a cart from a flat menu and moves the resulting order through
//! `pending`, `confirmed`, `delivered` and `cancelled`.

pub mod cart;
pub mod lifecycle;
pub mod menu;
pub mod orders;

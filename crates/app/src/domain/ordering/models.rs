//! Ordering Models

use std::collections::BTreeMap;

use railmeal::lifecycle::LifecycleAction;

use crate::domain::{ordering::session::OrderingSession, orders::records::OrderRecord};

/// Quantities keyed by menu entry id, as sent by clients that hold their own cart.
pub type CartQuantities = BTreeMap<String, u32>;

/// Where entering the ordering flow lands.
#[derive(Debug)]
pub enum Entry {
    /// The cart can be edited.
    Editable(OrderingSession),

    /// The order is settled; only the read-only view is available.
    AlreadyConfirmed(OrderRecord),
}

/// A record as shown on the tracking view.
#[derive(Debug, Clone, PartialEq)]
pub struct Tracking {
    pub record: OrderRecord,
    pub available_actions: Vec<LifecycleAction>,
}

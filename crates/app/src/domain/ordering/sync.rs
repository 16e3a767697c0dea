//! Cart to store synchronisation.

use railmeal::{cart::Cart, orders::OrderSummary};

use crate::{
    domain::{
        lifecycle::{LifecycleError, OrderLifecycle},
        orders::records::OrderRecord,
    },
    pnr::Pnr,
};

/// Turns cart snapshots into summary writes.
///
/// Failures are returned as-is; nothing is retried.
#[derive(Debug, Clone)]
pub struct SyncProtocol {
    lifecycle: OrderLifecycle,
}

impl SyncProtocol {
    #[must_use]
    pub fn new(lifecycle: OrderLifecycle) -> Self {
        Self { lifecycle }
    }

    /// Saves the selected lines as a pending summary.
    ///
    /// # Errors
    ///
    /// Returns any lifecycle or store failure.
    pub async fn persist_pending(
        &self,
        pnr: &Pnr,
        cart: &Cart,
    ) -> Result<OrderSummary, LifecycleError> {
        self.lifecycle.save_pending(pnr.clone(), cart).await
    }

    /// Saves the selected lines as the confirmed summary of `record`.
    ///
    /// # Errors
    ///
    /// Returns any validation, lifecycle or store failure.
    pub async fn commit_confirmed(
        &self,
        record: &OrderRecord,
        cart: &Cart,
    ) -> Result<OrderSummary, LifecycleError> {
        self.lifecycle.confirm(record, cart).await
    }
}

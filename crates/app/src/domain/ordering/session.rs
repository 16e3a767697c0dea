//! Ordering session.

use railmeal::{
    cart::{Cart, CartTotals},
    orders::OrderSummary,
};
use tracing::warn;

use crate::{
    domain::{lifecycle::LifecycleError, ordering::sync::SyncProtocol, orders::records::OrderRecord},
    pnr::Pnr,
};

/// One passenger's pass through the menu: the record fetched on entry, the cart and
/// whether the cart panel is showing.
#[derive(Debug, Clone)]
pub struct OrderingSession {
    record: OrderRecord,
    cart: Cart,
    cart_open: bool,
    sync: SyncProtocol,
}

impl OrderingSession {
    #[must_use]
    pub fn new(record: OrderRecord, cart: Cart, sync: SyncProtocol) -> Self {
        Self {
            record,
            cart,
            cart_open: false,
            sync,
        }
    }

    pub fn pnr(&self) -> &Pnr {
        &self.record.pnr
    }

    /// The record as last fetched or written by this session.
    pub fn record(&self) -> &OrderRecord {
        &self.record
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn totals(&self) -> CartTotals {
        self.cart.totals()
    }

    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    pub fn increment(&mut self, id: &str) -> Option<u32> {
        self.cart.increment(id)
    }

    pub fn decrement(&mut self, id: &str) -> Option<u32> {
        self.cart.decrement(id)
    }

    /// Shows the cart panel, saving a pending snapshot when it was closed.
    ///
    /// The panel opens even if the save fails. Returns `None` when it was already open.
    ///
    /// # Errors
    ///
    /// Returns the save failure.
    pub async fn open_cart(&mut self) -> Result<Option<OrderSummary>, LifecycleError> {
        if self.cart_open {
            return Ok(None);
        }

        self.cart_open = true;

        let summary = self
            .sync
            .persist_pending(&self.record.pnr, &self.cart)
            .await
            .inspect_err(|error| {
                warn!(pnr = %self.record.pnr, %error, "failed to save pending order");
            })?;

        self.record.order_summary = Some(summary.clone());

        Ok(Some(summary))
    }

    pub fn close_cart(&mut self) {
        self.cart_open = false;
    }

    /// Confirms the current cart.
    ///
    /// On failure the cart is left as it was so the passenger can retry.
    ///
    /// # Errors
    ///
    /// Returns any validation, lifecycle or store failure.
    pub async fn confirm(&mut self) -> Result<OrderSummary, LifecycleError> {
        let summary = self.sync.commit_confirmed(&self.record, &self.cart).await?;

        self.record.order_summary = Some(summary.clone());

        Ok(summary)
    }
}

//! Lifecycle service.
//!
//! Every save, confirm and cancel re-reads the stored record and asks
//! [`railmeal::lifecycle::transition`] whether the write is allowed before touching the store.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use clap::ValueEnum;
use jiff::Timestamp;
use railmeal::{
    cart::Cart,
    lifecycle::{LifecycleAction, Transition, TransitionError, transition},
    orders::{OrderItem, OrderStatus, OrderSummary},
};
use tracing::{info, warn};

use crate::{
    domain::{
        lifecycle::{
            errors::LifecycleError,
            in_flight::{InFlight, InFlightPermit},
        },
        orders::{
            OrderRecordsError, OrderRecordsService, ValidationError, data::NewOrderRecord,
            records::OrderRecord,
        },
    },
    pnr::Pnr,
};

/// Whether an order with no items may be confirmed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum EmptyOrderPolicy {
    #[default]
    Allow,
    Reject,
}

#[derive(Clone)]
pub struct OrderLifecycle {
    records: Arc<dyn OrderRecordsService>,
    in_flight: InFlight,
    empty_orders: EmptyOrderPolicy,
}

impl Debug for OrderLifecycle {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("OrderLifecycle")
            .field("in_flight", &self.in_flight)
            .field("empty_orders", &self.empty_orders)
            .finish_non_exhaustive()
    }
}

impl OrderLifecycle {
    #[must_use]
    pub fn new(records: Arc<dyn OrderRecordsService>, empty_orders: EmptyOrderPolicy) -> Self {
        Self::with_in_flight(records, empty_orders, InFlight::new())
    }

    /// Builds a lifecycle sharing write claims with other holders of `in_flight`.
    #[must_use]
    pub fn with_in_flight(
        records: Arc<dyn OrderRecordsService>,
        empty_orders: EmptyOrderPolicy,
        in_flight: InFlight,
    ) -> Self {
        Self {
            records,
            in_flight,
            empty_orders,
        }
    }

    /// Validates the registration form and creates the record.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an incomplete form, `Busy` while another write for
    /// the PNR is running, or `DuplicateKey` when the PNR already has a record.
    pub async fn register(&self, form: NewOrderRecord) -> Result<OrderRecord, LifecycleError> {
        let form = form.normalized();

        form.validate()?;

        let _permit = self.claim(&form.pnr)?;
        let record = self.records.register(form).await?;

        info!(
            pnr = %record.pnr,
            station = %record.selected_station,
            "registered passenger"
        );

        Ok(record)
    }

    /// Reads a record as stored.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when no record exists for `pnr`.
    pub async fn fetch(&self, pnr: Pnr) -> Result<OrderRecord, LifecycleError> {
        Ok(self.records.fetch(pnr).await?)
    }

    /// Stores the cart as a pending summary.
    ///
    /// # Errors
    ///
    /// Fails when the stored order is no longer pending, another write for the PNR is in
    /// progress, or the store fails.
    pub async fn save_pending(&self, pnr: Pnr, cart: &Cart) -> Result<OrderSummary, LifecycleError> {
        let _permit = self.claim(&pnr)?;

        let current = self.records.fetch(pnr.clone()).await?;

        let summary = self
            .apply(&pnr, current.status(), LifecycleAction::SavePending, cart_items(cart))
            .await?;

        summary.ok_or_else(|| OrderRecordsError::NotFound.into())
    }

    /// Confirms `record` with the contents of `cart`.
    ///
    /// The record's identity fields are checked locally first; the status check uses the
    /// stored copy.
    ///
    /// # Errors
    ///
    /// Fails on missing identity fields, an empty cart when empty orders are rejected, a
    /// stored status other than pending, a concurrent write, or a store failure.
    pub async fn confirm(
        &self,
        record: &OrderRecord,
        cart: &Cart,
    ) -> Result<OrderSummary, LifecycleError> {
        record.check_confirmable()?;

        self.check_not_empty(cart.is_empty())?;

        let _permit = self.claim(&record.pnr)?;

        let current = self.records.fetch(record.pnr.clone()).await?;

        let summary = self
            .apply(&record.pnr, current.status(), LifecycleAction::Confirm, cart_items(cart))
            .await?;

        summary.ok_or_else(|| OrderRecordsError::NotFound.into())
    }

    /// Confirms the pending summary already stored for `pnr`, as the tracking view does.
    ///
    /// # Errors
    ///
    /// Fails like [`OrderLifecycle::confirm`], and with `MissingSummary` when nothing was
    /// saved yet.
    pub async fn confirm_pending(&self, pnr: Pnr) -> Result<OrderSummary, LifecycleError> {
        let _permit = self.claim(&pnr)?;

        let current = self.records.fetch(pnr.clone()).await?;

        current.check_confirmable()?;

        let Some(stored) = current.order_summary.as_ref() else {
            return Err(TransitionError::MissingSummary {
                action: LifecycleAction::Confirm,
            }
            .into());
        };

        self.check_not_empty(stored.is_empty())?;

        let summary = self
            .apply(&pnr, current.status(), LifecycleAction::Confirm, stored.items.clone())
            .await?;

        summary.ok_or_else(|| OrderRecordsError::NotFound.into())
    }

    /// Cancels a pending order by deleting its record.
    ///
    /// # Errors
    ///
    /// Fails when the stored order is not pending, another write is in progress, or the
    /// store fails.
    pub async fn cancel(&self, pnr: Pnr) -> Result<(), LifecycleError> {
        let _permit = self.claim(&pnr)?;

        let current = self.records.fetch(pnr.clone()).await?;

        self.apply(&pnr, current.status(), LifecycleAction::Cancel, Vec::new())
            .await?;

        Ok(())
    }

    fn claim(&self, pnr: &Pnr) -> Result<InFlightPermit, LifecycleError> {
        self.in_flight.try_acquire(pnr).ok_or_else(|| {
            warn!(pnr = %pnr, "rejected overlapping order write");

            LifecycleError::Busy(pnr.clone())
        })
    }

    fn check_not_empty(&self, empty: bool) -> Result<(), LifecycleError> {
        if empty && self.empty_orders == EmptyOrderPolicy::Reject {
            return Err(ValidationError::EmptyOrder.into());
        }

        Ok(())
    }

    async fn apply(
        &self,
        pnr: &Pnr,
        current: Option<OrderStatus>,
        action: LifecycleAction,
        items: Vec<OrderItem>,
    ) -> Result<Option<OrderSummary>, LifecycleError> {
        let allowed = transition(current, action).inspect_err(|error| {
            warn!(pnr = %pnr, %action, %error, "rejected order transition");
        })?;

        match allowed {
            Transition::Save(status) => {
                let summary = OrderSummary::from_items(items, status, Timestamp::now());

                self.records
                    .save_summary(pnr.clone(), summary.clone())
                    .await?;

                info!(
                    pnr = %pnr,
                    status = %status,
                    total_items = summary.total_items,
                    total_amount = %summary.total_amount,
                    "saved order summary"
                );

                Ok(Some(summary))
            }
            Transition::Delete => {
                self.records.remove(pnr.clone()).await?;

                info!(pnr = %pnr, "cancelled order");

                Ok(None)
            }
        }
    }
}

fn cart_items(cart: &Cart) -> Vec<OrderItem> {
    cart.selected_lines().map(OrderItem::from_line).collect()
}

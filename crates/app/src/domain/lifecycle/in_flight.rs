//! Per-PNR write exclusion.

use std::{
    collections::HashSet,
    sync::{Arc, Mutex, PoisonError},
};

use crate::pnr::Pnr;

/// Tracks which PNRs have a write in progress.
///
/// A second write for the same PNR is refused rather than queued, so a double-clicked
/// confirm produces one write and one `Busy` answer.
#[derive(Debug, Clone, Default)]
pub struct InFlight {
    active: Arc<Mutex<HashSet<Pnr>>>,
}

impl InFlight {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims `pnr`, or returns `None` if it is already claimed.
    ///
    /// The claim is released when the returned permit drops.
    pub fn try_acquire(&self, pnr: &Pnr) -> Option<InFlightPermit> {
        let mut active = self.active.lock().unwrap_or_else(PoisonError::into_inner);

        if !active.insert(pnr.clone()) {
            return None;
        }

        Some(InFlightPermit {
            active: Arc::clone(&self.active),
            pnr: pnr.clone(),
        })
    }

    /// Whether a write for `pnr` is in progress.
    pub fn is_active(&self, pnr: &Pnr) -> bool {
        self.active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(pnr)
    }
}

/// Exclusive claim on one PNR.
#[derive(Debug)]
#[must_use = "the claim is released as soon as the permit is dropped"]
pub struct InFlightPermit {
    active: Arc<Mutex<HashSet<Pnr>>>,
    pnr: Pnr,
}

impl Drop for InFlightPermit {
    fn drop(&mut self) {
        self.active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.pnr);
    }
}

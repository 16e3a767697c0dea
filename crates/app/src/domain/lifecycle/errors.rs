//! Lifecycle errors.

use railmeal::lifecycle::TransitionError;
use thiserror::Error;

use crate::{
    domain::orders::{OrderRecordsError, ValidationError},
    pnr::Pnr,
};

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error(transparent)]
    Records(#[from] OrderRecordsError),

    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("another update to order {0} is still in progress")]
    Busy(Pnr),
}

impl LifecycleError {
    /// Whether the request never reached the store and may be sent again unchanged.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Busy(_) => true,
            Self::Records(error) => error.is_transient(),
            Self::Transition(_) | Self::Validation(_) => false,
        }
    }
}

//! Order records errors.

use railmeal::orders::SummaryError;
use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::pnr::PnrError;

#[derive(Debug, Error)]
pub enum OrderRecordsError {
    #[error("order not found, please place an order first")]
    NotFound,

    #[error("an order already exists for this PNR")]
    DuplicateKey,

    #[error("order summary is inconsistent")]
    InvalidSummary(#[from] SummaryError),

    #[error("order store is temporarily unavailable")]
    Transient(#[source] Error),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl OrderRecordsError {
    /// Whether retrying the same call may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Transient(_))
    }
}

impl From<Error> for OrderRecordsError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        if matches!(
            error,
            Error::Io(_) | Error::Tls(_) | Error::PoolTimedOut | Error::PoolClosed | Error::WorkerCrashed
        ) {
            return Self::Transient(error);
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::DuplicateKey,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

/// Input rejected before it reaches the store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error(transparent)]
    Pnr(#[from] PnrError),

    #[error("online payment is not available yet, please choose cash on delivery")]
    OnlinePaymentUnavailable,

    #[error("cannot place an order with no items")]
    EmptyOrder,
}

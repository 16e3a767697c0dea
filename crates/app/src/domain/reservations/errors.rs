//! Reservation lookup errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReservationError {
    #[error("reservation service is unreachable")]
    Transient(#[source] reqwest::Error),

    #[error("reservation service answered with status {0}")]
    UpstreamStatus(u16),

    #[error("reservation service returned an unreadable body")]
    InvalidBody(#[source] reqwest::Error),
}

impl ReservationError {
    /// Whether the same lookup may succeed later.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Transient(_) | Self::UpstreamStatus(_))
    }
}

impl From<reqwest::Error> for ReservationError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            return Self::InvalidBody(error);
        }

        Self::Transient(error)
    }
}

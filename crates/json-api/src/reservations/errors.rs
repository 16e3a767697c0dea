//! Reservation Errors

use salvo::http::StatusError;
use tracing::{error, warn};

use railmeal_app::domain::reservations::ReservationError;

pub(crate) fn into_status_error(error: ReservationError) -> StatusError {
    match error {
        ReservationError::Transient(source) => {
            warn!("reservation service unreachable: {source}");

            StatusError::service_unavailable().brief("Reservation service is unavailable")
        }
        ReservationError::UpstreamStatus(status) => {
            warn!(status, "reservation service rejected the lookup");

            StatusError::service_unavailable().brief("Reservation service is unavailable")
        }
        ReservationError::InvalidBody(source) => {
            error!("unreadable reservation response: {source}");

            StatusError::bad_gateway()
        }
    }
}

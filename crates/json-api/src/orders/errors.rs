//! Order Errors

use salvo::http::StatusError;
use tracing::{error, warn};

use railmeal_app::domain::{
    lifecycle::LifecycleError, ordering::OrderingError, orders::OrderRecordsError,
};

use crate::menu;

pub(crate) fn into_status_error(error: OrderingError) -> StatusError {
    match error {
        OrderingError::Lifecycle(error) => lifecycle_status_error(error),
        OrderingError::Menu(error) => menu::errors::into_status_error(error),
    }
}

fn lifecycle_status_error(error: LifecycleError) -> StatusError {
    match error {
        LifecycleError::Records(error) => records_status_error(error),
        LifecycleError::Transition(error) => StatusError::conflict().brief(error.to_string()),
        LifecycleError::Validation(error) => StatusError::bad_request().brief(error.to_string()),
        LifecycleError::Busy(pnr) => {
            warn!(pnr = %pnr, "rejected overlapping order update");

            StatusError::conflict().brief("Another update to this order is in progress")
        }
    }
}

fn records_status_error(error: OrderRecordsError) -> StatusError {
    let brief = error.to_string();

    match error {
        OrderRecordsError::NotFound => StatusError::not_found().brief(brief),
        OrderRecordsError::DuplicateKey => StatusError::conflict().brief(brief),
        OrderRecordsError::Transient(source) => {
            warn!("order store unavailable: {source}");

            StatusError::service_unavailable().brief("Order store is temporarily unavailable")
        }
        OrderRecordsError::InvalidSummary(source) => {
            error!("refused to store inconsistent order summary: {source}");

            StatusError::internal_server_error()
        }
        OrderRecordsError::Sql(source) => {
            error!("order store failure: {source}");

            StatusError::internal_server_error()
        }
    }
}

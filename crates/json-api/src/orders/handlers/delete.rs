//! Cancel Order Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*, observability::observe_order_action, orders::errors::into_status_error,
    state::State,
};

/// Cancel Order Handler
///
/// Deletes a pending order. Settled orders cannot be cancelled.
#[endpoint(
    tags("orders"),
    summary = "Cancel Order",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Order cancelled"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid PNR"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::CONFLICT, description = "Order is not pending or is busy"),
    ),
)]
#[tracing::instrument(
    name = "orders.cancel",
    skip(pnr, depot),
    fields(pnr = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    pnr: PathParam<String>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let pnr = pnr.into_pnr()?;

    tracing::Span::current().record("pnr", tracing::field::display(&pnr));

    let result = state.app.ordering.cancel(pnr).await;

    observe_order_action("cancel", result.is_ok());

    result.map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}

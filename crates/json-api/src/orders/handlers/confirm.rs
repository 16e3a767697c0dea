//! Confirm Order Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use railmeal::orders::OrderSummary;
use railmeal_app::{
    domain::ordering::{OrderingError, OrderingService},
    pnr::Pnr,
};

use crate::{
    extensions::*,
    observability::observe_order_action,
    orders::{
        errors::into_status_error,
        models::{CartRequest, OrderSummaryResponse},
    },
    state::State,
};

/// Reads the optional `{quantities}` body; an empty body means "confirm what was saved".
async fn cart_request(req: &mut Request) -> Result<Option<CartRequest>, StatusError> {
    let payload = req.payload().await.or_400("could not read request body")?;

    if payload.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    serde_json::from_slice(payload)
        .map(Some)
        .or_400("invalid cart payload")
}

async fn confirm(
    ordering: &dyn OrderingService,
    pnr: Pnr,
    request: Option<CartRequest>,
) -> Result<OrderSummary, OrderingError> {
    match request {
        Some(cart) => ordering.confirm_cart(pnr, cart.quantities).await,
        None => ordering.confirm_pending(pnr).await,
    }
}

/// Confirm Order Handler
///
/// With a `{quantities}` body the cart is confirmed as sent. Without a body the stored
/// pending summary is confirmed, as from the tracking view.
#[endpoint(
    tags("orders"),
    summary = "Confirm Order",
    responses(
        (status_code = StatusCode::OK, description = "Order confirmed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing details or empty order"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::CONFLICT, description = "Order is not pending or is busy"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Order store unavailable"),
    ),
)]
#[tracing::instrument(
    name = "orders.confirm",
    skip(pnr, req, depot),
    fields(pnr = tracing::field::Empty, from_pending = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    pnr: PathParam<String>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<OrderSummaryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let pnr = pnr.into_pnr()?;
    let span = tracing::Span::current();

    span.record("pnr", tracing::field::display(&pnr));
    let request = cart_request(req).await?;

    span.record("from_pending", request.is_none());

    let result = confirm(state.app.ordering.as_ref(), pnr, request).await;

    observe_order_action("confirm", result.is_ok());

    Ok(Json(result.map_err(into_status_error)?.into()))
}

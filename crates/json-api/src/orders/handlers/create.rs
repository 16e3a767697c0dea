//! Create Order Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::extract::JsonBody,
    prelude::*,
};

use crate::{
    extensions::*,
    orders::{
        errors::into_status_error,
        models::{CreateOrderRequest, OrderRecordResponse},
    },
    state::State,
};

/// Create Order Handler
///
/// Registers a passenger; the record starts without an order summary.
#[endpoint(
    tags("orders"),
    summary = "Register Passenger",
    responses(
        (status_code = StatusCode::CREATED, description = "Order record created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid registration form"),
        (status_code = StatusCode::CONFLICT, description = "An order already exists for this PNR"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Order store unavailable"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateOrderRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderRecordResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let form = json.into_inner().into_new_record()?;

    let record = state
        .app
        .ordering
        .register(form)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/orders/{}", record.pnr), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(record.into()))
}

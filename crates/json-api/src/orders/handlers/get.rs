//! Get Order Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    orders::{errors::into_status_error, models::TrackingResponse},
    state::State,
};

/// Get Order Handler
///
/// Returns the tracking view: the record and the actions it currently allows.
#[endpoint(
    tags("orders"),
    summary = "Track Order",
    responses(
        (status_code = StatusCode::OK, description = "Tracking view"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid PNR"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Order store unavailable"),
    ),
)]
pub(crate) async fn handler(
    pnr: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<TrackingResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let pnr = pnr.into_pnr()?;

    let tracking = state
        .app
        .ordering
        .track(pnr)
        .await
        .map_err(into_status_error)?;

    Ok(Json(tracking.into()))
}

#[cfg(test)]
mod tests {
    use railmeal::lifecycle::LifecycleAction;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use railmeal_app::domain::{
        ordering::{MockOrderingService, Tracking},
        orders::OrderRecordsError,
    };

    use crate::test_helpers::{TEST_PNR, make_record, orders_service, pending_summary};

    use super::*;

    fn make_service(ordering: MockOrderingService) -> Service {
        orders_service(ordering, Router::with_path("orders/{pnr}").get(handler))
    }

    #[tokio::test]
    async fn pending_order_offers_confirm_and_cancel() -> TestResult {
        let mut record = make_record(TEST_PNR)?;

        record.order_summary = Some(pending_summary());

        let mut ordering = MockOrderingService::new();

        ordering
            .expect_track()
            .once()
            .withf(|pnr| pnr.as_str() == TEST_PNR)
            .return_once(move |_| {
                Ok(Tracking {
                    record,
                    available_actions: vec![LifecycleAction::Confirm, LifecycleAction::Cancel],
                })
            });

        let mut res = TestClient::get(format!("http://example.com/orders/{TEST_PNR}"))
            .send(&make_service(ordering))
            .await;

        let body: TrackingResponse = res.take_json().await?;
        let summary = body.record.order_summary.as_ref();

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.available_actions, ["confirm", "cancel"]);
        assert_eq!(summary.map(|s| s.total_items), Some(3));
        assert_eq!(summary.map(|s| s.total_amount.as_str()), Some("350"));

        Ok(())
    }

    #[tokio::test]
    async fn unknown_order_returns_404() -> TestResult {
        let mut ordering = MockOrderingService::new();

        ordering
            .expect_track()
            .once()
            .return_once(|_| Err(OrderRecordsError::NotFound.into()));

        let res = TestClient::get(format!("http://example.com/orders/{TEST_PNR}"))
            .send(&make_service(ordering))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}

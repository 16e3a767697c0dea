//! Order Entry Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    orders::{errors::into_status_error, models::EntryResponse},
    state::State,
};

/// Order Entry Handler
///
/// Opens the ordering flow: an editable cart restored from any pending summary, or the
/// read-only view once the order is settled.
#[endpoint(
    tags("orders"),
    summary = "Enter Ordering",
    responses(
        (status_code = StatusCode::OK, description = "Editable cart or read-only view"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid PNR"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
    ),
)]
pub(crate) async fn handler(
    pnr: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<EntryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let pnr = pnr.into_pnr()?;

    let entry = state
        .app
        .ordering
        .enter(pnr)
        .await
        .map_err(into_status_error)?;

    Ok(Json(entry.into()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use railmeal::{cart::Cart, menu::MenuEntry, orders::OrderStatus};
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use railmeal_app::domain::{
        lifecycle::{EmptyOrderPolicy, OrderLifecycle},
        ordering::{Entry, MockOrderingService, OrderingSession, SyncProtocol},
        orders::MemoryOrderRecordsService,
    };

    use crate::test_helpers::{TEST_PNR, make_record, orders_service, summary_with_status};

    use super::*;

    fn make_service(ordering: MockOrderingService) -> Service {
        orders_service(ordering, Router::with_path("orders/{pnr}/entry").get(handler))
    }

    fn sync() -> SyncProtocol {
        SyncProtocol::new(OrderLifecycle::new(
            Arc::new(MemoryOrderRecordsService::new()),
            EmptyOrderPolicy::Allow,
        ))
    }

    #[tokio::test]
    async fn pending_order_restores_the_cart() -> TestResult {
        let mut record = make_record(TEST_PNR)?;

        record.order_summary = Some(summary_with_status(OrderStatus::Pending));

        let cart = Cart::with_quantities(
            [
                MenuEntry::new("a", "Veg Biryani", Decimal::from(100), ""),
                MenuEntry::new("b", "Paneer Thali", Decimal::from(150), ""),
            ],
            [("a", 2), ("b", 1)],
        );

        let session = OrderingSession::new(record, cart, sync());

        let mut ordering = MockOrderingService::new();

        ordering
            .expect_enter()
            .once()
            .withf(|pnr| pnr.as_str() == TEST_PNR)
            .return_once(move |_| Ok(Entry::Editable(session)));

        let mut res = TestClient::get(format!("http://example.com/orders/{TEST_PNR}/entry"))
            .send(&make_service(ordering))
            .await;

        let body: EntryResponse = res.take_json().await?;
        let cart = body.cart.as_ref();

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.view, "editable");
        assert_eq!(cart.map(|c| c.total_items), Some(3));
        assert_eq!(cart.map(|c| c.total_amount.as_str()), Some("350"));
        assert_eq!(
            cart.and_then(|c| c.lines.first()).map(|l| l.line_total.as_str()),
            Some("200")
        );

        Ok(())
    }

    #[tokio::test]
    async fn confirmed_order_lands_on_the_read_only_view() -> TestResult {
        let mut record = make_record(TEST_PNR)?;

        record.order_summary = Some(summary_with_status(OrderStatus::Confirmed));

        let mut ordering = MockOrderingService::new();

        ordering
            .expect_enter()
            .once()
            .return_once(move |_| Ok(Entry::AlreadyConfirmed(record)));

        let mut res = TestClient::get(format!("http://example.com/orders/{TEST_PNR}/entry"))
            .send(&make_service(ordering))
            .await;

        let body: EntryResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.view, "alreadyConfirmed");
        assert!(body.cart.is_none(), "settled orders expose no cart");
        assert_eq!(
            body.record.order_summary.map(|s| s.order_status),
            Some("confirmed".to_string())
        );

        Ok(())
    }
}

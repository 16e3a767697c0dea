//! Save Cart Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
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

/// Save Cart Handler
///
/// Stores the cart as the pending order summary, replacing any earlier pending one.
#[endpoint(
    tags("orders"),
    summary = "Save Pending Order",
    responses(
        (status_code = StatusCode::OK, description = "Pending summary saved"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid PNR or cart"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::CONFLICT, description = "Order is already settled or busy"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Order store unavailable"),
    ),
)]
#[tracing::instrument(
    name = "orders.save",
    skip(pnr, json, depot),
    fields(pnr = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    pnr: PathParam<String>,
    json: JsonBody<CartRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderSummaryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let pnr = pnr.into_pnr()?;

    tracing::Span::current().record("pnr", tracing::field::display(&pnr));

    let result = state
        .app
        .ordering
        .save_cart(pnr, json.into_inner().quantities)
        .await;

    observe_order_action("save", result.is_ok());

    Ok(Json(result.map_err(into_status_error)?.into()))
}

#[cfg(test)]
mod tests {
    use railmeal::{
        lifecycle::{LifecycleAction, TransitionError},
        orders::OrderStatus,
    };
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use railmeal_app::domain::{lifecycle::LifecycleError, ordering::MockOrderingService};

    use crate::test_helpers::{TEST_PNR, orders_service, pending_summary};

    use super::*;

    fn make_service(ordering: MockOrderingService) -> Service {
        orders_service(ordering, Router::with_path("orders/{pnr}/summary").put(handler))
    }

    #[tokio::test]
    async fn saves_quantities_as_pending() -> TestResult {
        let mut ordering = MockOrderingService::new();

        ordering
            .expect_save_cart()
            .once()
            .withf(|pnr, quantities| {
                pnr.as_str() == TEST_PNR
                    && quantities.get("a") == Some(&2)
                    && quantities.get("b") == Some(&1)
            })
            .return_once(|_, _| Ok(pending_summary()));

        let mut res = TestClient::put(format!("http://example.com/orders/{TEST_PNR}/summary"))
            .json(&json!({ "quantities": { "a": 2, "b": 1 } }))
            .send(&make_service(ordering))
            .await;

        let body: OrderSummaryResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.order_status, "pending");
        assert_eq!(body.total_amount, "350");
        assert_eq!(
            body.items.first().map(|i| i.total_price.as_str()),
            Some("200")
        );

        Ok(())
    }

    #[tokio::test]
    async fn settled_order_returns_409() -> TestResult {
        let mut ordering = MockOrderingService::new();

        ordering.expect_save_cart().once().return_once(|_, _| {
            Err(LifecycleError::Transition(TransitionError::Illegal {
                status: OrderStatus::Confirmed,
                action: LifecycleAction::SavePending,
            })
            .into())
        });

        let res = TestClient::put(format!("http://example.com/orders/{TEST_PNR}/summary"))
            .json(&json!({ "quantities": {} }))
            .send(&make_service(ordering))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }

    #[tokio::test]
    async fn negative_quantities_are_rejected() -> TestResult {
        let mut ordering = MockOrderingService::new();

        ordering.expect_save_cart().never();

        let res = TestClient::put(format!("http://example.com/orders/{TEST_PNR}/summary"))
            .json(&json!({ "quantities": { "a": -1 } }))
            .send(&make_service(ordering))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}

//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use railmeal::orders::{OrderItem, OrderStatus, OrderSummary};
use railmeal_app::{
    context::AppContext,
    domain::{
        menu::MockMenuService,
        ordering::MockOrderingService,
        orders::records::{OrderRecord, PaymentMethod},
        reservations::MockReservationsService,
    },
    pnr::{Pnr, PnrError},
};

use crate::state::State;

pub(crate) const TEST_PNR: &str = "4521873690";

fn strict_menu_mock() -> MockMenuService {
    let mut menu = MockMenuService::new();

    menu.expect_list_menu().never();
    menu.expect_add_entry().never();

    menu
}

fn strict_ordering_mock() -> MockOrderingService {
    let mut ordering = MockOrderingService::new();

    ordering.expect_register().never();
    ordering.expect_track().never();
    ordering.expect_enter().never();
    ordering.expect_save_cart().never();
    ordering.expect_confirm_cart().never();
    ordering.expect_confirm_pending().never();
    ordering.expect_cancel().never();

    ordering
}

fn strict_reservations_mock() -> MockReservationsService {
    let mut reservations = MockReservationsService::new();

    reservations.expect_lookup().never();

    reservations
}

fn state_with(
    menu: MockMenuService,
    ordering: MockOrderingService,
    reservations: MockReservationsService,
) -> Arc<State> {
    State::from_app_context(AppContext {
        menu: Arc::new(menu),
        ordering: Arc::new(ordering),
        reservations: Arc::new(reservations),
    })
}

fn service(app_state: Arc<State>, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(app_state)).push(route))
}

pub(crate) fn menu_service(menu: MockMenuService, route: Router) -> Service {
    service(
        state_with(menu, strict_ordering_mock(), strict_reservations_mock()),
        route,
    )
}

pub(crate) fn orders_service(ordering: MockOrderingService, route: Router) -> Service {
    service(
        state_with(strict_menu_mock(), ordering, strict_reservations_mock()),
        route,
    )
}

pub(crate) fn reservations_service(reservations: MockReservationsService, route: Router) -> Service {
    service(
        state_with(strict_menu_mock(), strict_ordering_mock(), reservations),
        route,
    )
}

pub(crate) fn make_record(pnr: &str) -> Result<OrderRecord, PnrError> {
    Ok(OrderRecord {
        pnr: Pnr::parse(pnr)?,
        name: "Asha Rao".to_string(),
        phone_number: "9876543210".to_string(),
        contact_on_whatsapp: true,
        email: None,
        berth_number: "B2".to_string(),
        seat_number: "34".to_string(),
        payment_method: PaymentMethod::Cash,
        selected_station: "BRC".to_string(),
        order_summary: None,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    })
}

/// Two biryanis at 100 and a thali at 150.
pub(crate) fn summary_with_status(status: OrderStatus) -> OrderSummary {
    OrderSummary::from_items(
        vec![
            OrderItem::new("Veg Biryani", 2, Decimal::from(100)),
            OrderItem::new("Paneer Thali", 1, Decimal::from(150)),
        ],
        status,
        Timestamp::UNIX_EPOCH,
    )
}

pub(crate) fn pending_summary() -> OrderSummary {
    summary_with_status(OrderStatus::Pending)
}

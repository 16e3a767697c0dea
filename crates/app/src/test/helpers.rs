//! Test Helpers

use jiff::Timestamp;
use railmeal::{
    cart::Cart,
    menu::MenuEntry,
    orders::{OrderItem, OrderStatus, OrderSummary},
};
use rust_decimal::Decimal;

use crate::{
    domain::orders::{
        data::NewOrderRecord,
        records::{OrderRecord, PaymentMethod},
    },
    pnr::{Pnr, PnrError},
};

pub(crate) fn menu() -> Vec<MenuEntry> {
    vec![
        MenuEntry::new("a", "Veg Biryani", Decimal::from(100), "/img/biryani.png"),
        MenuEntry::new("b", "Paneer Thali", Decimal::from(150), "/img/thali.png"),
        MenuEntry::new("c", "Masala Chai", Decimal::new(2050, 2), "/img/chai.png"),
    ]
}

pub(crate) fn cart_with(quantities: &[(&str, u32)]) -> Cart {
    Cart::with_quantities(menu(), quantities.iter().copied())
}

pub(crate) fn new_order_record(pnr: &str) -> Result<NewOrderRecord, PnrError> {
    Ok(NewOrderRecord {
        pnr: Pnr::parse(pnr)?,
        name: "Asha Rao".to_string(),
        phone_number: "9876543210".to_string(),
        contact_on_whatsapp: true,
        email: None,
        berth_number: "B2".to_string(),
        seat_number: "34".to_string(),
        payment_method: PaymentMethod::Cash,
        selected_station: "BRC".to_string(),
    })
}

pub(crate) fn record_for(pnr: Pnr) -> OrderRecord {
    OrderRecord {
        pnr,
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
    }
}

pub(crate) fn order_record(pnr: &str) -> Result<OrderRecord, PnrError> {
    Ok(record_for(Pnr::parse(pnr)?))
}

/// Two biryanis and a thali, pending.
pub(crate) fn pending_summary() -> OrderSummary {
    OrderSummary::from_items(
        vec![
            OrderItem::new("Veg Biryani", 2, Decimal::from(100)),
            OrderItem::new("Paneer Thali", 1, Decimal::from(150)),
        ],
        OrderStatus::Pending,
        Timestamp::UNIX_EPOCH,
    )
}

//! Order request and response bodies.

use std::string::ToString;

use salvo::{oapi::ToSchema, prelude::StatusError};
use serde::{Deserialize, Serialize};

use railmeal::{
    cart::{Cart, CartLine},
    orders::{OrderItem, OrderSummary},
};
use railmeal_app::{
    domain::{
        ordering::{CartQuantities, Entry, Tracking},
        orders::{
            data::NewOrderRecord,
            records::{OrderRecord, PaymentMethod},
        },
    },
    pnr::Pnr,
};

use crate::extensions::*;

/// Registration Form
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateOrderRequest {
    #[serde(rename = "pnrNumber", alias = "pnr")]
    pub pnr: String,
    pub name: String,
    pub phone_number: String,

    #[serde(default)]
    pub contact_on_whatsapp: bool,

    #[serde(default)]
    pub email: Option<String>,

    pub berth_number: String,
    pub seat_number: String,

    /// `cash` or `online`; only `cash` is accepted for now
    pub payment_method: String,

    pub selected_station: String,
}

impl CreateOrderRequest {
    /// Parses the PNR and payment method; field rules are checked by the lifecycle.
    pub(crate) fn into_new_record(self) -> Result<NewOrderRecord, StatusError> {
        Ok(NewOrderRecord {
            pnr: Pnr::parse(&self.pnr).or_400("invalid PNR")?,
            name: self.name,
            phone_number: self.phone_number,
            contact_on_whatsapp: self.contact_on_whatsapp,
            email: self.email,
            berth_number: self.berth_number,
            seat_number: self.seat_number,
            payment_method: self
                .payment_method
                .parse::<PaymentMethod>()
                .or_400("invalid paymentMethod")?,
            selected_station: self.selected_station,
        })
    }
}

/// Cart quantities keyed by menu entry id.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartRequest {
    #[serde(default)]
    pub quantities: CartQuantities,
}

/// Order Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderItemResponse {
    pub foodname: String,
    pub quantity: u32,

    /// Unit price as a decimal string
    pub price: String,

    /// Line total as a decimal string
    pub total_price: String,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        Self {
            foodname: item.foodname,
            quantity: item.quantity,
            price: item.price.to_string(),
            total_price: item.total_price.to_string(),
        }
    }
}

/// Order Summary Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderSummaryResponse {
    pub items: Vec<OrderItemResponse>,
    pub total_items: u64,
    pub total_amount: String,
    pub order_status: String,
    pub order_date: String,
}

impl From<OrderSummary> for OrderSummaryResponse {
    fn from(summary: OrderSummary) -> Self {
        Self {
            items: summary
                .items
                .into_iter()
                .map(OrderItemResponse::from)
                .collect(),
            total_items: summary.total_items,
            total_amount: summary.total_amount.to_string(),
            order_status: summary.order_status.to_string(),
            order_date: summary.order_date.to_string(),
        }
    }
}

/// Order Record Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderRecordResponse {
    #[serde(rename = "pnrNumber")]
    pub pnr: String,
    pub name: String,
    pub phone_number: String,
    pub contact_on_whatsapp: bool,
    pub email: Option<String>,
    pub berth_number: String,
    pub seat_number: String,
    pub payment_method: String,
    pub selected_station: String,

    /// Absent until the cart is first saved
    pub order_summary: Option<OrderSummaryResponse>,

    pub created_at: String,
    pub updated_at: String,
}

impl From<OrderRecord> for OrderRecordResponse {
    fn from(record: OrderRecord) -> Self {
        let email = record.contact_email().map(ToString::to_string);

        Self {
            pnr: record.pnr.into_string(),
            name: record.name,
            phone_number: record.phone_number,
            contact_on_whatsapp: record.contact_on_whatsapp,
            email,
            berth_number: record.berth_number,
            seat_number: record.seat_number,
            payment_method: record.payment_method.to_string(),
            selected_station: record.selected_station,
            order_summary: record.order_summary.map(OrderSummaryResponse::from),
            created_at: record.created_at.to_string(),
            updated_at: record.updated_at.to_string(),
        }
    }
}

/// Tracking View
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TrackingResponse {
    pub record: OrderRecordResponse,

    /// Actions the passenger may take next (`confirm`, `cancel`)
    pub available_actions: Vec<String>,
}

impl From<Tracking> for TrackingResponse {
    fn from(tracking: Tracking) -> Self {
        Self {
            record: tracking.record.into(),
            available_actions: tracking
                .available_actions
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

/// Cart Line Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartLineResponse {
    pub id: String,
    pub name: String,
    pub unit_price: String,
    pub quantity: u32,
    pub line_total: String,
}

impl From<&CartLine> for CartLineResponse {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.entry.id.clone(),
            name: line.entry.name.clone(),
            unit_price: line.entry.unit_price.to_string(),
            quantity: line.quantity,
            line_total: line.line_total().to_string(),
        }
    }
}

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartResponse {
    /// One line per menu entry, in menu order
    pub lines: Vec<CartLineResponse>,
    pub total_items: u64,
    pub total_amount: String,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        let totals = cart.totals();

        Self {
            lines: cart.lines().iter().map(CartLineResponse::from).collect(),
            total_items: totals.total_items,
            total_amount: totals.total_amount.to_string(),
        }
    }
}

/// Ordering Entry
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EntryResponse {
    /// `editable` or `alreadyConfirmed`
    pub view: String,
    pub record: OrderRecordResponse,

    /// The restored cart; absent once the order is settled
    pub cart: Option<CartResponse>,
}

impl From<Entry> for EntryResponse {
    fn from(entry: Entry) -> Self {
        match entry {
            Entry::Editable(session) => Self {
                view: "editable".to_string(),
                cart: Some(session.cart().into()),
                record: session.record().clone().into(),
            },
            Entry::AlreadyConfirmed(record) => Self {
                view: "alreadyConfirmed".to_string(),
                record: record.into(),
                cart: None,
            },
        }
    }
}

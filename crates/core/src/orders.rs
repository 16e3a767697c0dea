//! Orders

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cart::CartLine;

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Saved from an open cart, not yet confirmed by the passenger
    Pending,

    /// Confirmed by the passenger, no longer editable
    Confirmed,

    /// Handed over by the fulfilment process
    Delivered,

    /// Withdrawn by the passenger
    Cancelled,
}

impl OrderStatus {
    /// Returns the lowercase name used on the wire and in storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// A persisted order line.
///
/// Items are snapshots: they copy the name and unit price of the menu entry at the time the
/// summary was built, so later menu changes never alter a saved order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Menu entry name at the time of the snapshot
    pub foodname: String,

    /// Number of units, always greater than zero
    pub quantity: u32,

    /// Unit price at the time of the snapshot
    pub price: Decimal,

    /// `quantity * price`
    pub total_price: Decimal,
}

impl OrderItem {
    /// Creates an order item, deriving its total price.
    pub fn new(foodname: impl Into<String>, quantity: u32, price: Decimal) -> Self {
        Self {
            foodname: foodname.into(),
            quantity,
            price,
            total_price: Decimal::from(quantity) * price,
        }
    }

    /// Snapshots a cart line.
    pub fn from_line(line: &CartLine) -> Self {
        Self::new(line.entry.name.clone(), line.quantity, line.entry.unit_price)
    }
}

/// Errors raised when a summary's derived fields disagree with its items.
#[derive(Debug, Error, PartialEq)]
pub enum SummaryError {
    /// An item was recorded with zero quantity.
    #[error("item {0:?} has zero quantity")]
    ZeroQuantity(String),

    /// An item's total price is not its quantity times its price.
    #[error("item {foodname:?} totals {actual} but should total {expected}")]
    LineTotalMismatch {
        /// Offending item name
        foodname: String,
        /// Recomputed line total
        expected: Decimal,
        /// Stored line total
        actual: Decimal,
    },

    /// `totalItems` disagrees with the item quantities.
    #[error("summary records {actual} items but its lines hold {expected}")]
    TotalItemsMismatch {
        /// Recomputed item count
        expected: u64,
        /// Stored item count
        actual: u64,
    },

    /// `totalAmount` disagrees with the item totals.
    #[error("summary records an amount of {actual} but its lines total {expected}")]
    TotalAmountMismatch {
        /// Recomputed amount
        expected: Decimal,
        /// Stored amount
        actual: Decimal,
    },
}

/// The order embedded in a passenger's record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    /// Ordered lines, in menu order
    pub items: Vec<OrderItem>,

    /// Sum of item quantities
    pub total_items: u64,

    /// Sum of item totals
    pub total_amount: Decimal,

    /// Lifecycle status
    pub order_status: OrderStatus,

    /// When the summary was last saved or confirmed
    pub order_date: Timestamp,
}

impl OrderSummary {
    /// Builds a summary from items, deriving both totals.
    pub fn from_items(items: Vec<OrderItem>, status: OrderStatus, date: Timestamp) -> Self {
        let (total_items, total_amount) = recompute_totals(&items);

        Self {
            items,
            total_items,
            total_amount,
            order_status: status,
            order_date: date,
        }
    }

    /// Returns a copy of this summary with a new status and date; items and totals are kept.
    #[must_use]
    pub fn restamped(&self, status: OrderStatus, date: Timestamp) -> Self {
        Self {
            order_status: status,
            order_date: date,
            ..self.clone()
        }
    }

    /// Whether the summary holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Checks that every derived field matches a recomputation from the items.
    ///
    /// # Errors
    ///
    /// Returns the first [`SummaryError`] found.
    pub fn verify(&self) -> Result<(), SummaryError> {
        for item in &self.items {
            if item.quantity == 0 {
                return Err(SummaryError::ZeroQuantity(item.foodname.clone()));
            }

            let expected = Decimal::from(item.quantity) * item.price;

            if item.total_price != expected {
                return Err(SummaryError::LineTotalMismatch {
                    foodname: item.foodname.clone(),
                    expected,
                    actual: item.total_price,
                });
            }
        }

        let (total_items, total_amount) = recompute_totals(&self.items);

        if self.total_items != total_items {
            return Err(SummaryError::TotalItemsMismatch {
                expected: total_items,
                actual: self.total_items,
            });
        }

        if self.total_amount != total_amount {
            return Err(SummaryError::TotalAmountMismatch {
                expected: total_amount,
                actual: self.total_amount,
            });
        }

        Ok(())
    }
}

fn recompute_totals(items: &[OrderItem]) -> (u64, Decimal) {
    items.iter().fold((0, Decimal::ZERO), |(count, amount), item| {
        (count + u64::from(item.quantity), amount + item.total_price)
    })
}

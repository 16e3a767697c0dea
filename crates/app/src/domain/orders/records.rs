//! Order Records

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::Timestamp;
use railmeal::orders::{OrderStatus, OrderSummary};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{domain::orders::errors::ValidationError, pnr::Pnr};

/// Stand-in address the registration form submits when the passenger gives none.
pub const PLACEHOLDER_EMAIL: &str = "noemail@gmail.com";

/// How the passenger pays on delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Online,
}

impl PaymentMethod {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Online => "online",
        }
    }
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown payment method: {0}")]
pub struct UnknownPaymentMethod(pub String);

impl FromStr for PaymentMethod {
    type Err = UnknownPaymentMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cash" => Ok(Self::Cash),
            "online" => Ok(Self::Online),
            _ => Err(UnknownPaymentMethod(s.to_string())),
        }
    }
}

/// Order Record
///
/// One per PNR. `order_summary` stays empty until the cart is first saved.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub pnr: Pnr,
    pub name: String,
    pub phone_number: String,
    pub contact_on_whatsapp: bool,
    pub email: Option<String>,
    pub berth_number: String,
    pub seat_number: String,
    pub payment_method: PaymentMethod,
    pub selected_station: String,
    pub order_summary: Option<OrderSummary>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl OrderRecord {
    /// Status of the stored summary, `None` before the first save.
    pub fn status(&self) -> Option<OrderStatus> {
        self.order_summary
            .as_ref()
            .map(|summary| summary.order_status)
    }

    /// The email to show the passenger, hiding the placeholder.
    pub fn contact_email(&self) -> Option<&str> {
        self.email
            .as_deref()
            .filter(|email| !email.eq_ignore_ascii_case(PLACEHOLDER_EMAIL))
    }

    /// Checks the fields a confirmation depends on.
    ///
    /// # Errors
    ///
    /// Returns the first missing field.
    pub fn check_confirmable(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("phoneNumber", &self.phone_number)?;
        require("selectedStation", &self.selected_station)?;

        Ok(())
    }
}

pub(crate) fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }

    Ok(())
}

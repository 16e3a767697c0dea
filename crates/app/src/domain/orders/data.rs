//! Order registration data

use jiff::Timestamp;

use crate::{
    domain::orders::{
        errors::ValidationError,
        records::{OrderRecord, PLACEHOLDER_EMAIL, PaymentMethod, require},
    },
    pnr::Pnr,
};

/// The passenger details captured before the first cart save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrderRecord {
    pub pnr: Pnr,
    pub name: String,
    pub phone_number: String,
    pub contact_on_whatsapp: bool,
    pub email: Option<String>,
    pub berth_number: String,
    pub seat_number: String,
    pub payment_method: PaymentMethod,
    pub selected_station: String,
}

impl NewOrderRecord {
    /// Trims every text field and drops a blank or placeholder email.
    #[must_use]
    pub fn normalized(self) -> Self {
        let email = self
            .email
            .map(|email| email.trim().to_string())
            .filter(|email| !email.is_empty() && !email.eq_ignore_ascii_case(PLACEHOLDER_EMAIL));

        Self {
            pnr: self.pnr,
            name: self.name.trim().to_string(),
            phone_number: self.phone_number.trim().to_string(),
            contact_on_whatsapp: self.contact_on_whatsapp,
            email,
            berth_number: self.berth_number.trim().to_string(),
            seat_number: self.seat_number.trim().to_string(),
            payment_method: self.payment_method,
            selected_station: self.selected_station.trim().to_string(),
        }
    }

    /// Checks the registration form.
    ///
    /// # Errors
    ///
    /// Returns the first rule the form breaks. Only cash on delivery is accepted.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("phoneNumber", &self.phone_number)?;
        require("berthNumber", &self.berth_number)?;
        require("seatNumber", &self.seat_number)?;
        require("selectedStation", &self.selected_station)?;

        if self.payment_method != PaymentMethod::Cash {
            return Err(ValidationError::OnlinePaymentUnavailable);
        }

        Ok(())
    }

    pub(crate) fn into_record(self, at: Timestamp) -> OrderRecord {
        OrderRecord {
            pnr: self.pnr,
            name: self.name,
            phone_number: self.phone_number,
            contact_on_whatsapp: self.contact_on_whatsapp,
            email: self.email,
            berth_number: self.berth_number,
            seat_number: self.seat_number,
            payment_method: self.payment_method,
            selected_station: self.selected_station,
            order_summary: None,
            created_at: at,
            updated_at: at,
        }
    }
}

//! Passenger Name Record keys

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use thiserror::Error;

const MAX_PNR_LEN: usize = 32;

/// Errors raised when parsing a PNR.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PnrError {
    /// The input was empty or only whitespace.
    #[error("PNR is required")]
    Empty,

    /// The input is longer than any reservation system issues.
    #[error("PNR must be at most {MAX_PNR_LEN} characters")]
    TooLong,

    /// The input contains something other than ASCII letters and digits.
    #[error("PNR may only contain letters and digits")]
    InvalidCharacter,
}

/// A reservation code, the primary key of an order record.
///
/// Surrounding whitespace is trimmed; the remaining value must be ASCII alphanumeric.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pnr(String);

impl Pnr {
    /// Parses and validates a PNR.
    ///
    /// # Errors
    ///
    /// Returns a [`PnrError`] describing the first rule the input breaks.
    pub fn parse(value: &str) -> Result<Self, PnrError> {
        let value = value.trim();

        if value.is_empty() {
            return Err(PnrError::Empty);
        }

        if value.len() > MAX_PNR_LEN {
            return Err(PnrError::TooLong);
        }

        if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(PnrError::InvalidCharacter);
        }

        Ok(Self(value.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for Pnr {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Pnr {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl FromStr for Pnr {
    type Err = PnrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Pnr> for String {
    fn from(value: Pnr) -> Self {
        value.into_string()
    }
}

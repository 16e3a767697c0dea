//! Ordering errors.

use thiserror::Error;

use crate::domain::{
    lifecycle::LifecycleError,
    menu::MenuServiceError,
    orders::{OrderRecordsError, ValidationError},
};

#[derive(Debug, Error)]
pub enum OrderingError {
    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),

    #[error("failed to load the menu")]
    Menu(#[from] MenuServiceError),
}

impl From<OrderRecordsError> for OrderingError {
    fn from(error: OrderRecordsError) -> Self {
        Self::Lifecycle(error.into())
    }
}

impl From<ValidationError> for OrderingError {
    fn from(error: ValidationError) -> Self {
        Self::Lifecycle(error.into())
    }
}

//! Order lifecycle
//!
//! Every write to an order goes through [`transition`], whichever screen or endpoint
//! triggered it:
//!
//! | current     | save pending | confirm     | cancel |
//! |-------------|--------------|-------------|--------|
//! | no summary  | `pending`    | rejected    | rejected |
//! | `pending`   | `pending`    | `confirmed` | delete |
//! | `confirmed` | rejected     | rejected    | rejected |
//! | `delivered` | rejected     | rejected    | rejected |
//! | `cancelled` | rejected     | rejected    | rejected |

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::orders::OrderStatus;

/// An action a passenger can take on their order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LifecycleAction {
    /// Persist the current cart as a pending snapshot
    SavePending,

    /// Confirm the order
    Confirm,

    /// Cancel the order, deleting the record
    Cancel,
}

impl Display for LifecycleAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::SavePending => "save",
            Self::Confirm => "confirm",
            Self::Cancel => "cancel",
        })
    }
}

/// Outcome of an allowed transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Write the summary with this status
    Save(OrderStatus),

    /// Delete the whole record
    Delete,
}

/// A transition the state machine does not allow.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TransitionError {
    /// The action needs an existing summary and the record has none.
    #[error("cannot {action} an order that has not been saved yet")]
    MissingSummary {
        /// Attempted action
        action: LifecycleAction,
    },

    /// The current status does not permit the action.
    #[error("cannot {action} an order that is already {status}")]
    Illegal {
        /// Current status
        status: OrderStatus,
        /// Attempted action
        action: LifecycleAction,
    },
}

/// Decides whether `action` may be applied to an order currently in `current`.
///
/// `current` is `None` when the record exists but has never had a summary saved.
///
/// # Errors
///
/// Returns a [`TransitionError`] when the action is not allowed.
pub fn transition(
    current: Option<OrderStatus>,
    action: LifecycleAction,
) -> Result<Transition, TransitionError> {
    match (current, action) {
        (None | Some(OrderStatus::Pending), LifecycleAction::SavePending) => {
            Ok(Transition::Save(OrderStatus::Pending))
        }
        (Some(OrderStatus::Pending), LifecycleAction::Confirm) => {
            Ok(Transition::Save(OrderStatus::Confirmed))
        }
        (Some(OrderStatus::Pending), LifecycleAction::Cancel) => Ok(Transition::Delete),
        (None, action) => Err(TransitionError::MissingSummary { action }),
        (Some(status), action) => Err(TransitionError::Illegal { status, action }),
    }
}

/// Actions offered on the tracking view for an order in `current`.
pub fn available_actions(current: Option<OrderStatus>) -> &'static [LifecycleAction] {
    match current {
        Some(OrderStatus::Pending) => &[LifecycleAction::Confirm, LifecycleAction::Cancel],
        _ => &[],
    }
}

/// Whether the ordering flow must show the read-only view instead of the cart.
pub fn is_locked(current: Option<OrderStatus>) -> bool {
    matches!(
        current,
        Some(OrderStatus::Confirmed | OrderStatus::Delivered | OrderStatus::Cancelled)
    )
}

//! Lifecycle operations on an order.
//!
//! | Action | From | To | Who |
//! |---|---|---|---|
//! | `Accept` | pending | accepted | owning restaurant |
//! | `Reject` | pending | cancelled | owning restaurant |
//! | `StartPreparing` | accepted | preparing | owning restaurant |
//! | `MarkReady` | preparing | ready | owning restaurant |
//! | `Claim` | ready, unassigned | picked_up | any delivery agent |
//! | `ConfirmDelivery` | picked_up | delivered | the order's customer, with the OTP |

use crate::model::{OrderStatus, Principal};

#[derive(Debug, Clone)]
pub enum OrderAction {
    Accept { by: Principal },
    Reject { by: Principal },
    StartPreparing { by: Principal },
    MarkReady { by: Principal },
    Claim { by: Principal },
    ConfirmDelivery { by: Principal, otp: String },
}

impl OrderAction {
    /// Status the order ends up in when the action succeeds.
    pub fn target(&self) -> OrderStatus {
        match self {
            OrderAction::Accept { .. } => OrderStatus::Accepted,
            OrderAction::Reject { .. } => OrderStatus::Cancelled,
            OrderAction::StartPreparing { .. } => OrderStatus::Preparing,
            OrderAction::MarkReady { .. } => OrderStatus::Ready,
            OrderAction::Claim { .. } => OrderStatus::PickedUp,
            OrderAction::ConfirmDelivery { .. } => OrderStatus::Delivered,
        }
    }

    pub fn principal(&self) -> Principal {
        match self {
            OrderAction::Accept { by }
            | OrderAction::Reject { by }
            | OrderAction::StartPreparing { by }
            | OrderAction::MarkReady { by }
            | OrderAction::Claim { by }
            | OrderAction::ConfirmDelivery { by, .. } => *by,
        }
    }
}

/// Orders have no free-form patch; every change goes through an [`OrderAction`].
#[derive(Debug)]
pub enum OrderUpdate {}

//! # Dashboards
//!
//! One controller per role. A controller is opened with the signed-in [`Session`] and the
//! [`Backend`] clients, loads the orders it is allowed to see into a [`LiveOrders`] index, and
//! keeps that index current from the change feed (`sync()` / `next_change()`).
//!
//! | Role | Orders in scope |
//! |---|---|
//! | customer | placed by me |
//! | restaurant | placed at my restaurant |
//! | delivery agent | ready and unassigned, or assigned to me |
//! | admin | all |
//!
//! [`Dashboard::open`] picks the controller from the session's role.

pub mod admin;
pub mod cart;
pub mod customer;
pub mod delivery;
pub mod error;
pub mod index;
pub mod restaurant;

pub use admin::{AdminStats, AdminView};
pub use cart::{Cart, CartLine};
pub use customer::{CustomerView, Menu};
pub use delivery::DeliveryView;
pub use error::ViewError;
pub use index::{LiveOrders, OrderIndex};
pub use restaurant::RestaurantView;

use crate::auth::Session;
use crate::lifecycle::Backend;
use crate::model::Role;

pub(crate) fn require_role(session: &Session, expected: Role) -> Result<(), ViewError> {
    if session.role() == expected {
        Ok(())
    } else {
        Err(ViewError::WrongRole {
            expected,
            actual: session.role(),
        })
    }
}

/// The dashboard for a signed-in user.
pub enum Dashboard {
    Customer(CustomerView),
    Restaurant(RestaurantView),
    Delivery(DeliveryView),
    Admin(AdminView),
}

impl Dashboard {
    pub async fn open(session: &Session, backend: Backend) -> Result<Self, ViewError> {
        let session = session.clone();
        Ok(match session.role() {
            Role::Customer => Dashboard::Customer(CustomerView::open(session, backend).await?),
            Role::Restaurant => Dashboard::Restaurant(RestaurantView::open(session, backend).await?),
            Role::DeliveryAgent => Dashboard::Delivery(DeliveryView::open(session, backend).await?),
            Role::Admin => Dashboard::Admin(AdminView::open(session, backend).await?),
        })
    }

    pub fn role(&self) -> Role {
        match self {
            Dashboard::Customer(_) => Role::Customer,
            Dashboard::Restaurant(_) => Role::Restaurant,
            Dashboard::Delivery(_) => Role::DeliveryAgent,
            Dashboard::Admin(_) => Role::Admin,
        }
    }

    pub async fn sync(&mut self) -> Result<usize, ViewError> {
        match self {
            Dashboard::Customer(view) => view.sync().await,
            Dashboard::Restaurant(view) => view.sync().await,
            Dashboard::Delivery(view) => view.sync().await,
            Dashboard::Admin(view) => view.sync().await,
        }
    }
}

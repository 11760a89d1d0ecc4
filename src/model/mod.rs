//! Row types and their payloads. The [`Record`](crate::framework::Record) impls live in the
//! per-table actor modules.

pub mod coupon;
pub mod dish;
pub mod ids;
pub mod order;
pub mod order_item;
pub mod profile;
pub mod restaurant;
pub mod tracking;

pub use coupon::*;
pub use dish::*;
pub use ids::*;
pub use order::*;
pub use order_item::*;
pub use profile::*;
pub use restaurant::*;
pub use tracking::*;

//! Typed wrappers around [`TableClient`](crate::framework::TableClient), one per table.

pub mod coupon_client;
pub mod dish_client;
pub mod order_client;
pub mod order_item_client;
pub mod profile_client;
pub mod restaurant_client;
pub mod tracking_client;

pub use coupon_client::*;
pub use dish_client::*;
pub use order_client::*;
pub use order_item_client::*;
pub use profile_client::*;
pub use restaurant_client::*;
pub use tracking_client::*;

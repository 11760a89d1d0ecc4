//! # System Lifecycle
//!
//! Starts every table actor, wires their dependencies through `run()` contexts and shuts them
//! down again.
//!
//! ## Wiring
//!
//! ```text
//! accounts      (no deps)
//! profiles      (no deps)
//! restaurants   -> profiles            owner must be a restaurant profile
//! dishes        (no deps)
//! coupons       (no deps)
//! order_items   (no deps)
//! tracking      (no deps)
//! orders        -> restaurants, order_items, tracking
//! ```
//!
//! All actors are created first and only then spawned with their context, so no table needs
//! another table's client at construction time.
//!
//! ## Shutdown
//!
//! An actor stops when every client of its table is gone. [`FoodSystem::shutdown`] drops the
//! clients it owns and awaits the tasks; session providers and views handed out earlier must be
//! dropped before calling it.

pub mod system;
pub mod tracing;

pub use self::tracing::*;
pub use system::*;

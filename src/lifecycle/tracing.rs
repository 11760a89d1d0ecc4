//! # Logging
//!
//! [`setup_tracing`] installs the process-wide `tracing` subscriber: compact output, no module
//! targets, level taken from `RUST_LOG`.
//!
//! ```bash
//! RUST_LOG=info cargo run      # one line per committed write and status change
//! RUST_LOG=debug cargo run     # adds request payloads and per-request spans
//! ```
//!
//! A placed and delivered order reads roughly like this at `info`:
//!
//! ```text
//! INFO checkout:place_order: Order placed order_id=... items=2 final_amount=230.0
//! INFO Inserted table="orders" id=... size=1
//! INFO restaurant:accept: Order status changed order_id=... status=accepted
//! INFO delivery:claim: Order claimed order_id=... agent=...
//! INFO customer:confirm_delivery: Delivery confirmed order_id=...
//! ```
//!
//! Payloads are logged once, at `debug`, with the `?` sigil (`debug!(?params, "...")`). Account rows
//! print without their password hash.

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // table names are logged as fields
        .compact() // Compact format shows spans inline (e.g. "checkout:place_order")
        .init();
}

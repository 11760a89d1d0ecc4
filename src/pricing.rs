//! # Checkout Pricing
//!
//! Pure functions turning cart lines and an optional coupon into a [`Quote`].
//!
//! * `subtotal = Σ price × quantity`
//! * percentage coupons: `subtotal × value / 100`, capped by `max_discount` when it is set
//! * fixed coupons: `value`, *not* capped to the subtotal, so `final_amount` can go negative

use crate::error::ValidationError;
use crate::model::{Coupon, DiscountType, OrderLine};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Derived checkout totals. `final_amount` is always `subtotal - discount`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub subtotal: f64,
    pub discount: f64,
    pub final_amount: f64,
    pub coupon_code: Option<String>,
}

impl Quote {
    pub fn new(subtotal: f64, discount: f64, coupon_code: Option<String>) -> Self {
        Self {
            subtotal,
            discount,
            final_amount: subtotal - discount,
            coupon_code,
        }
    }
}

pub fn subtotal(lines: &[OrderLine]) -> f64 {
    lines
        .iter()
        .map(|line| line.price * f64::from(line.quantity))
        .sum()
}

/// Discount granted by an already validated coupon.
pub fn discount_for(coupon: &Coupon, subtotal: f64) -> f64 {
    match coupon.discount_type {
        DiscountType::Percentage => {
            let discount = subtotal * coupon.discount_value / 100.0;
            // a zero cap counts as no cap
            match coupon.max_discount {
                Some(cap) if cap > 0.0 => discount.min(cap),
                _ => discount,
            }
        }
        DiscountType::Fixed => coupon.discount_value,
    }
}

/// Checks a looked-up coupon against the subtotal. `None` means the code matched nothing.
pub fn apply_coupon(
    coupon: Option<&Coupon>,
    subtotal: f64,
    now: DateTime<Utc>,
) -> Result<f64, ValidationError> {
    let coupon = match coupon {
        Some(c) if c.is_active && c.is_valid_at(now) => c,
        _ => return Err(ValidationError::InvalidCoupon),
    };
    if subtotal < coupon.min_order_amount {
        return Err(ValidationError::MinimumNotMet(coupon.min_order_amount));
    }
    Ok(discount_for(coupon, subtotal))
}

/// Prices a cart. Without a coupon the discount is zero.
pub fn quote(
    lines: &[OrderLine],
    coupon: Option<&Coupon>,
    now: DateTime<Utc>,
) -> Result<Quote, ValidationError> {
    let subtotal = subtotal(lines);
    match coupon {
        None => Ok(Quote::new(subtotal, 0.0, None)),
        Some(c) => {
            let discount = apply_coupon(Some(c), subtotal, now)?;
            Ok(Quote::new(subtotal, discount, Some(c.code.clone())))
        }
    }
}

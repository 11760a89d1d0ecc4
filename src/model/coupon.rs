use crate::model::CouponId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountType {
    Percentage,
    Fixed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    pub id: CouponId,
    /// Always stored upper-cased.
    pub code: String,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    pub min_order_amount: f64,
    pub max_discount: Option<f64>,
    pub valid_from: Option<DateTime<Utc>>,
    pub valid_until: Option<DateTime<Utc>>,
    pub is_active: bool,
}

impl Coupon {
    /// Normalizes a user-entered code the way codes are stored.
    pub fn normalize_code(code: &str) -> String {
        code.trim().to_uppercase()
    }

    /// Whether `now` falls inside the optional validity window.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.valid_from.map_or(true, |from| from <= now)
            && self.valid_until.map_or(true, |until| now <= until)
    }
}

#[derive(Debug, Clone)]
pub struct CouponCreate {
    pub code: String,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    pub min_order_amount: f64,
    pub max_discount: Option<f64>,
    pub valid_from: Option<DateTime<Utc>>,
    pub valid_until: Option<DateTime<Utc>>,
    pub is_active: bool,
}

impl CouponCreate {
    pub fn percentage(code: &str, percent: f64, max_discount: Option<f64>) -> Self {
        Self {
            code: code.to_string(),
            discount_type: DiscountType::Percentage,
            discount_value: percent,
            min_order_amount: 0.0,
            max_discount,
            valid_from: None,
            valid_until: None,
            is_active: true,
        }
    }

    pub fn fixed(code: &str, amount: f64) -> Self {
        Self {
            code: code.to_string(),
            discount_type: DiscountType::Fixed,
            discount_value: amount,
            min_order_amount: 0.0,
            max_discount: None,
            valid_from: None,
            valid_until: None,
            is_active: true,
        }
    }

    pub fn min_order(mut self, amount: f64) -> Self {
        self.min_order_amount = amount;
        self
    }
}

#[derive(Debug, Clone)]
pub enum CouponUpdate {
    SetActive(bool),
}

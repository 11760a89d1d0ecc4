use crate::coupon_actor::CouponError;
use crate::framework::Record;
use crate::model::{Coupon, CouponCreate, CouponId, CouponUpdate, DiscountType};
use async_trait::async_trait;

#[derive(Debug)]
pub enum CouponAction {}

#[async_trait]
impl Record for Coupon {
    const TABLE: &'static str = "coupons";
    type Id = CouponId;
    type Create = CouponCreate;
    type Update = CouponUpdate;
    type Action = CouponAction;
    type ActionResult = ();
    type Context = ();
    type Error = CouponError;

    fn id(&self) -> &CouponId {
        &self.id
    }

    /// Codes are unique regardless of case.
    fn unique_key(&self) -> Option<String> {
        Some(self.code.clone())
    }

    fn from_create_params(id: CouponId, params: CouponCreate) -> Result<Self, CouponError> {
        let code = Coupon::normalize_code(&params.code);
        if code.is_empty() {
            return Err(CouponError::MissingCode);
        }
        let value = params.discount_value;
        let in_range = match params.discount_type {
            DiscountType::Percentage => (0.0..=100.0).contains(&value),
            DiscountType::Fixed => value.is_finite() && value >= 0.0,
        };
        if !in_range {
            return Err(CouponError::InvalidValue(value));
        }
        Ok(Self {
            id,
            code,
            discount_type: params.discount_type,
            discount_value: value,
            min_order_amount: params.min_order_amount,
            max_discount: params.max_discount,
            valid_from: params.valid_from,
            valid_until: params.valid_until,
            is_active: params.is_active,
        })
    }

    async fn on_update(&mut self, update: CouponUpdate, _ctx: &()) -> Result<(), CouponError> {
        match update {
            CouponUpdate::SetActive(active) => self.is_active = active,
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: CouponAction, _ctx: &()) -> Result<(), CouponError> {
        match action {}
    }
}

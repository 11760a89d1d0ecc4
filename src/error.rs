//! Input validation failures shown to the user as-is.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Please fill all required fields")]
    MissingFields,

    #[error("Please enter delivery address")]
    MissingAddress,

    #[error("Your cart is empty")]
    EmptyCart,

    #[error("Quantity must be at least 1")]
    InvalidQuantity,

    #[error("Price must be a non-negative amount")]
    InvalidPrice,

    #[error("Invalid or expired coupon code")]
    InvalidCoupon,

    #[error("Minimum order amount of ₹{0} required")]
    MinimumNotMet(f64),

    #[error("Please enter OTP")]
    EmptyOtp,

    #[error("Invalid OTP. Please try again.")]
    OtpMismatch,

    #[error("Finish your current delivery before claiming another order")]
    ActiveDeliveryInProgress,

    #[error("No restaurant is registered for this account")]
    NoRestaurant,
}

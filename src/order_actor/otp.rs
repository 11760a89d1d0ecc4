//! Delivery confirmation codes.

use rand::rngs::OsRng;
use rand::Rng;
use std::ops::RangeInclusive;

/// Six-digit codes, no leading zero.
pub const OTP_RANGE: RangeInclusive<u32> = 100_000..=999_999;

/// Draws a code from the operating system CSPRNG.
pub fn generate_otp() -> String {
    OsRng.gen_range(OTP_RANGE).to_string()
}

/// Exact comparison of a submitted code against the stored one.
pub fn otp_matches(stored: Option<&str>, submitted: &str) -> bool {
    stored.is_some_and(|code| code == submitted)
}

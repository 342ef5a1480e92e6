use alloc::string::String;

use crate::wire::{F32_PRECISION, F64_PRECISION, RADIX};

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Formats signed integer in radix 36 with lowercase digits.
/// Negative values get leading `-`.
pub fn to_radix36(value: i64) -> String {
    // 64 bits take at most 13 base-36 digits.
    let mut buf = [0u8; 14];
    let mut pos = buf.len();

    let mut quotient = value.unsigned_abs();
    loop {
        pos -= 1;
        buf[pos] = DIGITS[(quotient % u64::from(RADIX)) as usize];
        quotient /= u64::from(RADIX);
        if quotient == 0 {
            break;
        }
    }

    if value < 0 {
        pos -= 1;
        buf[pos] = b'-';
    }

    buf[pos..].iter().map(|&b| char::from(b)).collect()
}

#[inline]
pub fn parse_i32(token: &str) -> Option<i32> {
    i32::from_str_radix(token, RADIX).ok()
}

#[inline]
pub fn parse_i64(token: &str) -> Option<i64> {
    i64::from_str_radix(token, RADIX).ok()
}

/// Scales and truncates toward zero.
/// Out of range values saturate and NaN becomes zero.
#[inline]
pub fn scale_f32(value: f32) -> i64 {
    (value * F32_PRECISION as f32) as i64
}

#[inline]
pub fn unscale_f32(scaled: i64) -> f32 {
    scaled as f32 / F32_PRECISION as f32
}

#[inline]
pub fn parse_f32(token: &str) -> Option<f32> {
    parse_i64(token).map(unscale_f32)
}

#[inline]
pub fn scale_f64(value: f64) -> i64 {
    (value * F64_PRECISION as f64) as i64
}

#[inline]
pub fn unscale_f64(scaled: i64) -> f64 {
    scaled as f64 / F64_PRECISION as f64
}

#[inline]
pub fn parse_f64(token: &str) -> Option<f64> {
    parse_i64(token).map(unscale_f64)
}

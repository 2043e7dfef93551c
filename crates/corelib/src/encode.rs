//! Exact decimal sizing and zero-padded digit rendering for powers of two.

use num_bigint::BigUint;
use num_traits::One;

use crate::errors::FeasibilityError;

/// Number of decimal digit positions needed for the largest `bitwidth`-bit
/// value, i.e. ceil(log10(2^bitwidth - 1)) computed exactly.
pub fn decimal_digit_width(bitwidth: u32) -> Result<usize, FeasibilityError> {
    if bitwidth == 0 {
        return Err(FeasibilityError::InvalidBitwidth { bitwidth });
    }
    // 2^1 - 1 = 1 is the only power of ten of the form 2^b - 1 (anything
    // larger is odd and > 1), so past that the ceil is just the digit count.
    if bitwidth == 1 {
        return Ok(0);
    }
    let max = (BigUint::one() << bitwidth) - BigUint::one();
    Ok(max.to_radix_le(10).len())
}

/// The ordered powers 2^0 .. 2^(bitwidth-1).
pub fn powers_of_two(bitwidth: u32) -> impl Iterator<Item = BigUint> {
    (0..bitwidth).map(|i| BigUint::one() << i)
}

/// Digit values of `value` left-padded with zeros to exactly `width`
/// positions, index 0 most significant. Same shape as a zfill of the
/// decimal string; `value` must already fit in `width` digits.
pub fn padded_digits(value: &BigUint, width: usize) -> Vec<u64> {
    let le = value.to_radix_le(10);
    (0..width)
        .map(|i| u64::from(le.get(width - 1 - i).copied().unwrap_or(0)))
        .collect()
}

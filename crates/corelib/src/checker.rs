//! Worst-case accumulation and carry simulation over byte-sized digit slots.

use serde::{Deserialize, Serialize};

use crate::encode::{decimal_digit_width, padded_digits, powers_of_two};
use crate::errors::FeasibilityError;

/// Capacity of a single-byte digit accumulator.
pub const BYTE_CAP: u64 = 255;

/// A position where a digit accumulator would exceed [`BYTE_CAP`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum OverflowEvent {
    /// Accumulated column sum exceeded the cap before any carrying.
    BeforeCarry { position: usize, value: u64 },
    /// Carrying out of `position` pushed the digit at `position - 1` over
    /// the cap; `value` is that digit after the carry landed.
    DuringCarry { position: usize, value: u64 },
}

/// Accumulation phase: column-wise digit sums of every power of two in the
/// range, with no intermediate carrying. This is the pessimistic scenario
/// where all powers land on the digit columns at once.
pub fn compute_digit_sums(bitwidth: u32) -> Result<Vec<u64>, FeasibilityError> {
    let width = decimal_digit_width(bitwidth)?;
    let mut digits = vec![0u64; width];
    for power in powers_of_two(bitwidth) {
        for (column, d) in digits.iter_mut().zip(padded_digits(&power, width)) {
            *column += d;
        }
    }
    Ok(digits)
}

/// Carry phase: reduce each digit mod 10 from least significant down to
/// index 1, folding the quotient into the next more significant digit.
/// Index 0 keeps whatever lands on it; there is no position -1 to carry
/// into. Returns every overflow observed, pre-carry findings first.
pub fn propagate_carries(digits: &mut [u64]) -> Vec<OverflowEvent> {
    let mut events: Vec<OverflowEvent> = digits
        .iter()
        .enumerate()
        .filter(|&(_, &value)| value > BYTE_CAP)
        .map(|(position, &value)| OverflowEvent::BeforeCarry { position, value })
        .collect();

    for i in (1..digits.len()).rev() {
        digits[i - 1] += digits[i] / 10;
        digits[i] %= 10;
        if digits[i - 1] > BYTE_CAP {
            events.push(OverflowEvent::DuringCarry {
                position: i,
                value: digits[i - 1],
            });
        }
    }
    events
}

//! Worst-case overflow check for byte-per-digit decimal encoding.
//!
//! A binary-to-decimal encoder can keep one byte per decimal digit and
//! defer all carrying to a single final pass, provided no digit slot ever
//! exceeds 255 along the way. This crate bounds that risk for a fixed
//! bit-width: it sums the zero-padded decimal columns of every power of
//! two in the range as if they all arrived at once, then simulates the
//! final carry pass, reporting every position that would overflow a byte.

pub mod checker;
pub mod encode;
pub mod errors;
pub mod report;

pub use checker::{compute_digit_sums, propagate_carries, OverflowEvent, BYTE_CAP};
pub use encode::decimal_digit_width;
pub use errors::FeasibilityError;
pub use report::{check_bitwidth, FeasibilityReport};

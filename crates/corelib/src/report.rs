//! Structured feasibility report propagated through the CLI.

use serde::{Deserialize, Serialize};

use crate::checker::{compute_digit_sums, propagate_carries, OverflowEvent};
use crate::errors::FeasibilityError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeasibilityReport {
    pub bitwidth: u32,
    pub digit_width: usize,
    /// Column sums after worst-case accumulation, before any carrying.
    pub accumulated: Vec<u64>,
    /// Digit sequence after the carry pass.
    pub carried: Vec<u64>,
    /// Overflow findings, pre-carry ones first, in emission order.
    pub events: Vec<OverflowEvent>,
}

impl FeasibilityReport {
    /// True when no accumulator would leave the single-byte range.
    pub fn feasible(&self) -> bool {
        self.events.is_empty()
    }

    /// Serialize the report into a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a report from a JSON string.
    pub fn from_json(data: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(data)
    }
}

/// Run both phases for one bitwidth and assemble the report.
pub fn check_bitwidth(bitwidth: u32) -> Result<FeasibilityReport, FeasibilityError> {
    let accumulated = compute_digit_sums(bitwidth)?;
    let mut carried = accumulated.clone();
    let events = propagate_carries(&mut carried);
    Ok(FeasibilityReport {
        bitwidth,
        digit_width: accumulated.len(),
        accumulated,
        carried,
        events,
    })
}

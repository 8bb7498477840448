//! Core type definitions for the 5PT engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pool tier identifier (1-based tier rank)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoolId(pub u8);

impl PoolId {
    pub fn new(id: u8) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How rewards are handled at the end of each simulated day.
///
/// Selected per day from the parameters; there is no hidden state behind
/// the choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayAction {
    /// Full gross reward is compounded into principal.
    AutoCompound,
    /// Claim tax is applied, then the post-tax reward is split between
    /// reinvestment and payout.
    ScheduledClaim,
    /// Manual mode, non-claim day: reward accrues into principal untaxed.
    AccrueOnly,
}

impl DayAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AutoCompound => "auto_compound",
            Self::ScheduledClaim => "scheduled_claim",
            Self::AccrueOnly => "accrue_only",
        }
    }
}

impl fmt::Display for DayAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

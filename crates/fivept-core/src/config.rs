//! Configuration types for the 5PT engine

use serde::{Deserialize, Serialize};

/// Stand-in values for on-chain figures the calculator approximates.
///
/// The real dashboard reads network-wide burned volume and live pool
/// participant counts from the investment-manager contract. The calculator
/// has no chain access, so it substitutes the fixed assumptions below.
/// Keeping them here (instead of inlined in the math) lets a future
/// integration swap in live values without touching the algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationAssumptions {
    /// Assumed network-wide burned/deposited volume, as a multiple of the
    /// user's own after-tax deposit.
    #[serde(default = "default_burned_volume_multiple")]
    pub burned_volume_multiple: f64,

    /// Assumed number of participants sharing each pool's distribution.
    #[serde(default = "default_pool_participants")]
    pub pool_participants: f64,

    /// Assumed average downline referrals per direct referral.
    #[serde(default = "default_downline_per_referral")]
    pub downline_per_referral: f64,
}

fn default_burned_volume_multiple() -> f64 {
    10.0
}

fn default_pool_participants() -> f64 {
    10.0
}

fn default_downline_per_referral() -> f64 {
    2.0
}

impl Default for SimulationAssumptions {
    fn default() -> Self {
        Self {
            burned_volume_multiple: default_burned_volume_multiple(),
            pool_participants: default_pool_participants(),
            downline_per_referral: default_downline_per_referral(),
        }
    }
}

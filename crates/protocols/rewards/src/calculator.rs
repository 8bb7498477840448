//! 5PT Reward Calculator
//!
//! Pure math functions for pool eligibility and daily reward composition.
//! No I/O, no async - just deterministic calculations.
//!
//! # Units
//!
//! All amounts are 5PT token units as f64. Rates are fractions in [0, 1].

use std::collections::BTreeSet;

use fivept_core::{PoolId, SimulationAssumptions};

use crate::constants::{rates, PoolTier};

/// Evaluate which pool tiers the user qualifies for numerically.
///
/// A tier is eligible iff all three thresholds are met at once: personal
/// investment, direct referral count, and direct referral volume.
/// Whitelist-only tiers are NOT filtered here; a tier can be numerically
/// eligible yet whitelist-gated. Filtering happens in reward composition.
///
/// Eligibility is evaluated against the initial deposit figures and stays
/// fixed for the whole projection: pool membership in the contract reflects
/// capital actually deposited up front, not simulated accrual.
pub fn eligible_pools(
    investment_amount: f64,
    referrals: u32,
    referral_volume: f64,
    tiers: &[PoolTier],
) -> BTreeSet<PoolId> {
    tiers
        .iter()
        .filter(|tier| {
            investment_amount >= tier.personal_invest_required
                && referrals >= tier.direct_refs_required
                && referral_volume >= tier.total_direct_invest_required
        })
        .map(|tier| tier.id)
        .collect()
}

/// Decomposition of one day's gross reward (before any claim tax)
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRewardBreakdown {
    /// 0.3%/day on the current (compounded) principal
    pub base_reward: f64,
    /// Share of the daily pool distribution pot, summed over eligible
    /// non-whitelist tiers
    pub pool_rewards: f64,
    /// Direct referral reward on referral volume
    pub referral_reward: f64,
    /// Assumed downline reward on referral volume
    pub downline_reward: f64,
}

impl DailyRewardBreakdown {
    /// Gross daily total across all components
    pub fn total(&self) -> f64 {
        self.base_reward + self.pool_rewards + self.referral_reward + self.downline_reward
    }
}

/// Compute one day's gross reward.
///
/// The base component compounds (it is computed on `current_investment`),
/// while pool/referral/downline components are computed on the original
/// after-tax deposit and referral inputs, which stay fixed for the run.
pub fn compute_daily_reward(
    current_investment: f64,
    after_tax_investment: f64,
    referrals: u32,
    referral_volume: f64,
    eligible: &BTreeSet<PoolId>,
    tiers: &[PoolTier],
    assumptions: &SimulationAssumptions,
) -> DailyRewardBreakdown {
    let base_reward = current_investment * rates::BASE_DAILY_RATE;

    // Pool pot approximated from the user's own deposit: the contract
    // distributes a fraction of network-wide burned volume, which the
    // calculator has no access to.
    let assumed_total_burned = after_tax_investment * assumptions.burned_volume_multiple;
    let daily_pool_distribution = assumed_total_burned * rates::POOL_DAILY_EMISSION_RATE;

    let pool_rewards: f64 = tiers
        .iter()
        .filter(|tier| !tier.whitelist_only && eligible.contains(&tier.id))
        .map(|tier| daily_pool_distribution * tier.share / assumptions.pool_participants)
        .sum();

    let referral_reward = referral_volume * rates::REFERRAL_DAILY_RATE * referrals as f64;

    let downline_reward = if referrals == 0 {
        0.0
    } else {
        referral_volume
            * rates::DOWNLINE_DAILY_RATE
            * referrals as f64
            * assumptions.downline_per_referral
    };

    DailyRewardBreakdown {
        base_reward,
        pool_rewards,
        referral_reward,
        downline_reward,
    }
}

/// Result of applying claim tax and the reinvest split to a gross reward
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimSplit {
    /// Claim tax removed from the gross reward
    pub tax: f64,
    /// Post-tax amount routed back into principal
    pub reinvested: f64,
    /// Post-tax amount paid out to the wallet
    pub claimed: f64,
}

/// Split a gross reward on a claim day: tax first, then the post-tax
/// remainder divided by `reinvest_percentage`.
pub fn claim_split(gross_reward: f64, claim_tax_percent: f64, reinvest_percentage: f64) -> ClaimSplit {
    let tax = gross_reward * claim_tax_percent;
    let after_tax = gross_reward - tax;
    let reinvested = after_tax * reinvest_percentage;
    let claimed = after_tax - reinvested;

    ClaimSplit {
        tax,
        reinvested,
        claimed,
    }
}

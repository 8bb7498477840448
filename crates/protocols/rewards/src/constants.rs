//! 5PT Reward Protocol Constants
//!
//! Pool tier catalog and daily rate parameters.
//! All tiers defined as configuration data for easy extension.

use fivept_core::{PoolId, SimulationError};

/// Pool tier configuration
///
/// Thresholds are compared against the user's *gross* investment amount
/// (pre deposit tax), matching how the investment-manager contract gates
/// pool membership on deposited capital.
#[derive(Debug, Clone)]
pub struct PoolTier {
    pub id: PoolId,
    pub name: &'static str,
    /// Minimum gross personal investment required
    pub personal_invest_required: f64,
    /// Minimum number of direct referrals required
    pub direct_refs_required: u32,
    /// Minimum total deposit volume across direct referrals
    pub total_direct_invest_required: f64,
    /// This tier's fractional share of the daily pool distribution pot
    pub share: f64,
    /// Whitelist-gated tiers never pay out in the simulation, even when
    /// the numeric thresholds are met
    pub whitelist_only: bool,
}

/// Daily rate parameters
pub mod rates {
    /// Base daily reward rate on current (compounded) principal (0.3%/day)
    pub const BASE_DAILY_RATE: f64 = 0.003;

    /// Fraction of assumed burned volume distributed to pools each day
    pub const POOL_DAILY_EMISSION_RATE: f64 = 0.00215;

    /// Daily referral reward rate, per direct referral, on referral volume
    pub const REFERRAL_DAILY_RATE: f64 = 0.00025;

    /// Daily downline reward rate, per downline referral, on referral volume
    pub const DOWNLINE_DAILY_RATE: f64 = 0.0006;

    /// Deposit tax taken at entry (10%)
    pub const DEFAULT_DEPOSIT_TAX: f64 = 0.10;

    /// Claim tax taken when rewards are claimed (10%)
    pub const DEFAULT_CLAIM_TAX: f64 = 0.10;

    /// Upper bound on the projection window
    pub const MAX_SIMULATION_DAYS: u32 = 365;
}

/// The nine pool tiers of the 5PT protocol, ordered by rank.
///
/// Tiers 8 and 9 are whitelist-gated partner pools; they carry the largest
/// shares but require out-of-band allow-listing that the simulation does
/// not model.
pub const POOL_TIERS: [PoolTier; 9] = [
    PoolTier {
        id: PoolId(1),
        name: "Bronze",
        personal_invest_required: 550.0,
        direct_refs_required: 1,
        total_direct_invest_required: 550.0,
        share: 0.0175,
        whitelist_only: false,
    },
    PoolTier {
        id: PoolId(2),
        name: "Silver",
        personal_invest_required: 1450.0,
        direct_refs_required: 2,
        total_direct_invest_required: 1450.0,
        share: 0.0175,
        whitelist_only: false,
    },
    PoolTier {
        id: PoolId(3),
        name: "Gold",
        personal_invest_required: 2900.0,
        direct_refs_required: 3,
        total_direct_invest_required: 2900.0,
        share: 0.0175,
        whitelist_only: false,
    },
    PoolTier {
        id: PoolId(4),
        name: "Platinum",
        personal_invest_required: 5800.0,
        direct_refs_required: 5,
        total_direct_invest_required: 5800.0,
        share: 0.0175,
        whitelist_only: false,
    },
    PoolTier {
        id: PoolId(5),
        name: "Diamond",
        personal_invest_required: 11600.0,
        direct_refs_required: 8,
        total_direct_invest_required: 11600.0,
        share: 0.0175,
        whitelist_only: false,
    },
    PoolTier {
        id: PoolId(6),
        name: "Elite",
        personal_invest_required: 23200.0,
        direct_refs_required: 12,
        total_direct_invest_required: 23200.0,
        share: 0.01,
        whitelist_only: false,
    },
    PoolTier {
        id: PoolId(7),
        name: "Legend",
        personal_invest_required: 46400.0,
        direct_refs_required: 16,
        total_direct_invest_required: 46400.0,
        share: 0.01,
        whitelist_only: false,
    },
    PoolTier {
        id: PoolId(8),
        name: "Founder",
        personal_invest_required: 92800.0,
        direct_refs_required: 20,
        total_direct_invest_required: 92800.0,
        share: 0.02,
        whitelist_only: true,
    },
    PoolTier {
        id: PoolId(9),
        name: "Genesis",
        personal_invest_required: 185600.0,
        direct_refs_required: 25,
        total_direct_invest_required: 185600.0,
        share: 0.02,
        whitelist_only: true,
    },
];

/// Look up a tier by its ID
pub fn pool_by_id(id: PoolId) -> Option<&'static PoolTier> {
    POOL_TIERS.iter().find(|tier| tier.id == id)
}

/// Sanity-check a pool catalog before it is used in a simulation.
///
/// The standard `POOL_TIERS` always passes; this guards injected
/// catalogs against duplicate tier IDs and malformed shares or
/// thresholds.
pub fn validate_catalog(tiers: &[PoolTier]) -> Result<(), SimulationError> {
    for (i, tier) in tiers.iter().enumerate() {
        if tiers[..i].iter().any(|prior| prior.id == tier.id) {
            return Err(SimulationError::InvalidCatalog {
                reason: format!("duplicate tier id {}", tier.id),
            });
        }
        if !tier.share.is_finite() || !(0.0..=1.0).contains(&tier.share) {
            return Err(SimulationError::InvalidCatalog {
                reason: format!("tier {} share must be a fraction between 0 and 1", tier.id),
            });
        }
        for (label, value) in [
            ("personal_invest_required", tier.personal_invest_required),
            (
                "total_direct_invest_required",
                tier.total_direct_invest_required,
            ),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SimulationError::InvalidCatalog {
                    reason: format!("tier {} {label} must be finite and non-negative", tier.id),
                });
            }
        }
    }
    Ok(())
}

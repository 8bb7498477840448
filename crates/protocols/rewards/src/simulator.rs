//! 5PT Investment Simulator
//!
//! The day-by-day projection loop: deposit tax at entry, one reward
//! composition per simulated day, then either auto-compounding or the
//! scheduled claim/reinvest split.
//!
//! Each run is a pure function of its parameters; nothing persists between
//! invocations and concurrent runs share no state.

use serde::{Deserialize, Serialize};

use fivept_core::{DayAction, PoolId, Result, SimulationAssumptions, SimulationError};

use crate::calculator::{claim_split, compute_daily_reward, eligible_pools};
use crate::constants::{rates, validate_catalog, PoolTier, POOL_TIERS};

/// Input parameters for one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Gross investment amount, pre deposit tax
    pub investment_amount: f64,
    /// Number of direct referrals
    pub referrals: u32,
    /// Total deposit volume across direct referrals
    pub referral_volume: f64,
    /// Projection window in days (1..=365)
    pub simulation_days: u32,
    /// Fraction of the gross deposit removed at entry
    pub deposit_tax_percent: f64,
    /// Fraction removed when rewards are claimed
    pub claim_tax_percent: f64,
    /// Fraction of a post-tax claim that is reinvested; only used when
    /// `auto_compound` is false
    pub reinvest_percentage: f64,
    /// Compound the full reward into principal every day, ignoring the
    /// claim schedule
    pub auto_compound: bool,
    /// Day interval between claims in manual mode
    pub claim_frequency_days: u32,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            investment_amount: 1000.0,
            referrals: 0,
            referral_volume: 0.0,
            simulation_days: 30,
            deposit_tax_percent: rates::DEFAULT_DEPOSIT_TAX,
            claim_tax_percent: rates::DEFAULT_CLAIM_TAX,
            reinvest_percentage: 0.5,
            auto_compound: true,
            claim_frequency_days: 7,
        }
    }
}

impl SimulationParameters {
    /// Validate parameters before entering the day loop.
    ///
    /// The loop itself cannot fail; every malformed input is rejected here
    /// so no `NaN`/infinity can appear partway through a run.
    pub fn validate(&self) -> std::result::Result<(), SimulationError> {
        if !self.investment_amount.is_finite() || self.investment_amount < 0.0 {
            return Err(SimulationError::invalid(
                "investment_amount",
                "must be a finite, non-negative amount",
            ));
        }
        if !self.referral_volume.is_finite() || self.referral_volume < 0.0 {
            return Err(SimulationError::invalid(
                "referral_volume",
                "must be a finite, non-negative amount",
            ));
        }
        if self.simulation_days < 1 || self.simulation_days > rates::MAX_SIMULATION_DAYS {
            return Err(SimulationError::invalid(
                "simulation_days",
                format!("must be between 1 and {}", rates::MAX_SIMULATION_DAYS),
            ));
        }
        for (field, value) in [
            ("deposit_tax_percent", self.deposit_tax_percent),
            ("claim_tax_percent", self.claim_tax_percent),
            ("reinvest_percentage", self.reinvest_percentage),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(SimulationError::invalid(
                    field,
                    "must be a fraction between 0 and 1",
                ));
            }
        }
        // Rejected in auto-compound mode too, even though the schedule is
        // not consulted there: a stored parameter set must stay valid when
        // the user toggles the mode.
        if self.claim_frequency_days < 1 {
            return Err(SimulationError::invalid(
                "claim_frequency_days",
                "must be >= 1",
            ));
        }
        Ok(())
    }
}

/// One simulated day's outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyResult {
    /// 1-based day number
    pub day: u32,
    /// Principal balance at end of day
    pub investment: f64,
    /// Gross reward for the day, before any claim tax
    pub daily_reward: f64,
    pub base_reward: f64,
    pub pool_rewards: f64,
    pub referral_reward: f64,
    pub downline_reward: f64,
}

/// Full projection for one parameter set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Gross amount the user entered
    pub initial_investment: f64,
    /// Principal after deposit tax, the day-0 starting balance
    pub after_tax_investment: f64,
    /// Principal at the end of the projection window
    pub current_investment: f64,
    /// Sum of all daily gross rewards
    pub total_earnings: f64,
    pub total_reinvested: f64,
    pub total_claimed: f64,
    pub deposit_tax_paid: f64,
    /// total_earnings / after_tax_investment, as a percentage
    pub roi: f64,
    pub daily_results: Vec<DailyResult>,
    /// Non-whitelist tiers the initial parameters qualify for, ascending
    pub eligible_pools: Vec<PoolId>,
}

/// Select the day's reward treatment from the claim configuration.
///
/// Recomputed fresh every day; there is no hidden state behind the choice.
fn day_action(auto_compound: bool, day: u32, claim_frequency_days: u32) -> DayAction {
    if auto_compound {
        DayAction::AutoCompound
    } else if day % claim_frequency_days == 0 {
        DayAction::ScheduledClaim
    } else {
        DayAction::AccrueOnly
    }
}

/// Run a projection against the standard 5PT pool catalog.
pub fn run_simulation(
    params: &SimulationParameters,
    assumptions: &SimulationAssumptions,
) -> Result<SimulationResult> {
    run_simulation_with_tiers(params, assumptions, &POOL_TIERS)
}

/// Run a projection against an explicit pool catalog.
///
/// The catalog is injected rather than read from ambient state so the
/// engine can be exercised against reduced or hypothetical tier tables.
pub fn run_simulation_with_tiers(
    params: &SimulationParameters,
    assumptions: &SimulationAssumptions,
    tiers: &[PoolTier],
) -> Result<SimulationResult> {
    params.validate()?;
    validate_catalog(tiers)?;

    let after_tax_investment = params.investment_amount * (1.0 - params.deposit_tax_percent);
    let deposit_tax_paid = params.investment_amount - after_tax_investment;

    // Eligibility is fixed at entry for the whole run: pool membership in
    // the contract reflects capital deposited up front, not simulated
    // accrual within the projection window.
    let eligible = eligible_pools(
        params.investment_amount,
        params.referrals,
        params.referral_volume,
        tiers,
    );

    let mut current_investment = after_tax_investment;
    let mut total_earnings = 0.0;
    let mut total_reinvested = 0.0;
    let mut total_claimed = 0.0;
    let mut daily_results = Vec::with_capacity(params.simulation_days as usize);

    for day in 1..=params.simulation_days {
        let breakdown = compute_daily_reward(
            current_investment,
            after_tax_investment,
            params.referrals,
            params.referral_volume,
            &eligible,
            tiers,
            assumptions,
        );
        let gross_reward = breakdown.total();
        total_earnings += gross_reward;

        match day_action(params.auto_compound, day, params.claim_frequency_days) {
            DayAction::AutoCompound | DayAction::AccrueOnly => {
                current_investment += gross_reward;
                total_reinvested += gross_reward;
            }
            DayAction::ScheduledClaim => {
                let split = claim_split(
                    gross_reward,
                    params.claim_tax_percent,
                    params.reinvest_percentage,
                );
                current_investment += split.reinvested;
                total_reinvested += split.reinvested;
                total_claimed += split.claimed;
            }
        }

        daily_results.push(DailyResult {
            day,
            investment: current_investment,
            daily_reward: gross_reward,
            base_reward: breakdown.base_reward,
            pool_rewards: breakdown.pool_rewards,
            referral_reward: breakdown.referral_reward,
            downline_reward: breakdown.downline_reward,
        });
    }

    // A zero after-tax principal (zero deposit, or 100% deposit tax) would
    // make the ratio undefined; report 0 instead of NaN/infinity.
    let roi = if after_tax_investment > 0.0 {
        total_earnings / after_tax_investment * 100.0
    } else {
        0.0
    };

    let eligible_pool_ids: Vec<PoolId> = tiers
        .iter()
        .filter(|tier| !tier.whitelist_only && eligible.contains(&tier.id))
        .map(|tier| tier.id)
        .collect();

    tracing::debug!(
        days = params.simulation_days,
        auto_compound = params.auto_compound,
        roi = roi,
        "simulation complete"
    );

    Ok(SimulationResult {
        initial_investment: params.investment_amount,
        after_tax_investment,
        current_investment,
        total_earnings,
        total_reinvested,
        total_claimed,
        deposit_tax_paid,
        roi,
        daily_results,
        eligible_pools: eligible_pool_ids,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    /// The reference scenario: 1000 gross, 5 refs, 5000 volume, 30 days
    fn sample_params() -> SimulationParameters {
        SimulationParameters {
            investment_amount: 1000.0,
            referrals: 5,
            referral_volume: 5000.0,
            simulation_days: 30,
            auto_compound: true,
            ..SimulationParameters::default()
        }
    }

    #[test]
    fn test_deposit_tax_conservation() {
        let result = run_simulation(&sample_params(), &SimulationAssumptions::default()).unwrap();

        assert!(approx_eq(result.after_tax_investment, 900.0));
        assert!(approx_eq(
            result.deposit_tax_paid,
            result.initial_investment - result.after_tax_investment
        ));
    }

    #[test]
    fn test_day_series_shape() {
        let result = run_simulation(&sample_params(), &SimulationAssumptions::default()).unwrap();

        assert_eq!(result.daily_results.len(), 30);
        for (i, daily) in result.daily_results.iter().enumerate() {
            assert_eq!(daily.day, i as u32 + 1);
        }
    }

    #[test]
    fn test_reference_scenario_day_one() {
        let result = run_simulation(&sample_params(), &SimulationAssumptions::default()).unwrap();
        let day1 = &result.daily_results[0];

        // base: 900 * 0.003 = 2.7
        assert!(approx_eq(day1.base_reward, 2.7));
        // referral: 5000 * 0.00025 * 5 = 6.25
        assert!(approx_eq(day1.referral_reward, 6.25));
        // downline: 5000 * 0.0006 * 5 * 2 = 30
        assert!(approx_eq(day1.downline_reward, 30.0));

        // Tier 1 qualifies (550 / 1 / 550), tier 2 does not (1450 personal)
        assert_eq!(result.eligible_pools, vec![PoolId(1)]);
    }

    #[test]
    fn test_auto_compound_conservation() {
        let result = run_simulation(&sample_params(), &SimulationAssumptions::default()).unwrap();

        let mut principal = result.after_tax_investment;
        for daily in &result.daily_results {
            principal += daily.daily_reward;
            assert!(approx_eq(daily.investment, principal));
        }
        assert_eq!(result.total_claimed, 0.0);
        assert!(approx_eq(result.total_reinvested, result.total_earnings));
        assert!(approx_eq(result.current_investment, principal));
    }

    #[test]
    fn test_manual_claim_schedule() {
        let params = SimulationParameters {
            auto_compound: false,
            claim_frequency_days: 7,
            reinvest_percentage: 0.5,
            simulation_days: 14,
            ..sample_params()
        };
        let result = run_simulation(&params, &SimulationAssumptions::default()).unwrap();

        // Days 1-6 accrue untaxed: principal grows by the full gross reward
        let mut principal = result.after_tax_investment;
        for daily in &result.daily_results[..6] {
            principal += daily.daily_reward;
            assert!(approx_eq(daily.investment, principal));
        }

        // Day 7 is the first claim day: claimed becomes non-zero and only
        // the reinvested half of the post-tax reward hits principal
        let day7 = &result.daily_results[6];
        let split = claim_split(day7.daily_reward, params.claim_tax_percent, 0.5);
        assert!(approx_eq(day7.investment, principal + split.reinvested));
        assert!(split.claimed > 0.0);

        // claimed + reinvested == gross * (1 - claim tax) on the claim day
        assert!(approx_eq(
            split.claimed + split.reinvested,
            day7.daily_reward * 0.9
        ));

        // Exactly two claim days in 14 days at frequency 7
        let expected_claimed = {
            let d7 = &result.daily_results[6];
            let d14 = &result.daily_results[13];
            claim_split(d7.daily_reward, 0.10, 0.5).claimed
                + claim_split(d14.daily_reward, 0.10, 0.5).claimed
        };
        assert!(approx_eq(result.total_claimed, expected_claimed));
    }

    #[test]
    fn test_roi_formula() {
        let result = run_simulation(&sample_params(), &SimulationAssumptions::default()).unwrap();
        assert!(approx_eq(
            result.roi,
            result.total_earnings / result.after_tax_investment * 100.0
        ));
        assert!(result.roi > 0.0);
    }

    #[test]
    fn test_degenerate_zero_investment() {
        let params = SimulationParameters {
            investment_amount: 0.0,
            referrals: 0,
            referral_volume: 0.0,
            ..sample_params()
        };
        let result = run_simulation(&params, &SimulationAssumptions::default()).unwrap();

        assert_eq!(result.after_tax_investment, 0.0);
        assert_eq!(result.total_earnings, 0.0);
        assert_eq!(result.roi, 0.0);
        assert!(result.roi.is_finite());
    }

    #[test]
    fn test_full_deposit_tax() {
        let params = SimulationParameters {
            deposit_tax_percent: 1.0,
            ..sample_params()
        };
        let result = run_simulation(&params, &SimulationAssumptions::default()).unwrap();

        assert_eq!(result.after_tax_investment, 0.0);
        assert_eq!(result.roi, 0.0);
        // Referral components still pay out; they are driven by referral
        // volume, not principal
        assert!(result.total_earnings > 0.0);
    }

    #[test]
    fn test_determinism() {
        let params = sample_params();
        let assumptions = SimulationAssumptions::default();
        let a = run_simulation(&params, &assumptions).unwrap();
        let b = run_simulation(&params, &assumptions).unwrap();

        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_validation_rejections() {
        let cases = [
            SimulationParameters {
                investment_amount: f64::NAN,
                ..sample_params()
            },
            SimulationParameters {
                investment_amount: -1.0,
                ..sample_params()
            },
            SimulationParameters {
                simulation_days: 0,
                ..sample_params()
            },
            SimulationParameters {
                simulation_days: 366,
                ..sample_params()
            },
            SimulationParameters {
                deposit_tax_percent: 1.5,
                ..sample_params()
            },
            SimulationParameters {
                claim_tax_percent: -0.1,
                ..sample_params()
            },
            SimulationParameters {
                reinvest_percentage: 2.0,
                ..sample_params()
            },
            SimulationParameters {
                auto_compound: false,
                claim_frequency_days: 0,
                ..sample_params()
            },
        ];

        for params in &cases {
            assert!(
                run_simulation(params, &SimulationAssumptions::default()).is_err(),
                "expected rejection: {:?}",
                params
            );
        }
    }

    #[test]
    fn test_zero_claim_frequency_rejected_in_both_modes() {
        // The schedule is only consulted in manual mode, but a zero
        // frequency is rejected regardless so a mode toggle on stored
        // parameters cannot surface it later
        for auto_compound in [true, false] {
            let params = SimulationParameters {
                auto_compound,
                claim_frequency_days: 0,
                ..sample_params()
            };
            assert!(run_simulation(&params, &SimulationAssumptions::default()).is_err());
        }
    }

    #[test]
    fn test_malformed_catalog_rejected() {
        let mut tiers = POOL_TIERS.to_vec();
        tiers[1].id = tiers[0].id;

        let err =
            run_simulation_with_tiers(&sample_params(), &SimulationAssumptions::default(), &tiers)
                .unwrap_err();
        assert_eq!(err.error_code(), "invalid_catalog");
    }

    #[test]
    fn test_whitelist_tiers_excluded_from_reported_set() {
        let params = SimulationParameters {
            investment_amount: 200_000.0,
            referrals: 30,
            referral_volume: 200_000.0,
            ..sample_params()
        };
        let result = run_simulation(&params, &SimulationAssumptions::default()).unwrap();

        // Numerically the whale clears all nine tiers, but tiers 8 and 9
        // are whitelist-gated and never reported or paid
        assert_eq!(
            result.eligible_pools,
            (1u8..=7).map(PoolId).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_eligibility_static_across_run() {
        // Start just below tier 2; compounding growth during the run must
        // not add tier 2 mid-simulation
        let params = SimulationParameters {
            investment_amount: 1400.0,
            referrals: 5,
            referral_volume: 5000.0,
            simulation_days: 365,
            ..sample_params()
        };
        let result = run_simulation(&params, &SimulationAssumptions::default()).unwrap();

        assert!(result.current_investment > 1450.0);
        assert_eq!(result.eligible_pools, vec![PoolId(1)]);

        // Every day's pool reward reflects the same single-tier share
        let first = result.daily_results[0].pool_rewards;
        for daily in &result.daily_results {
            assert!(approx_eq(daily.pool_rewards, first));
        }
    }

    #[test]
    fn test_result_serialization() {
        let result = run_simulation(&sample_params(), &SimulationAssumptions::default()).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let parsed: SimulationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }

    #[test]
    fn test_reduced_catalog_injection() {
        let tiers = &POOL_TIERS[..1];
        let params = sample_params();
        let result =
            run_simulation_with_tiers(&params, &SimulationAssumptions::default(), tiers).unwrap();
        assert_eq!(result.eligible_pools, vec![PoolId(1)]);
    }
}

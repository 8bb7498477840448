//! 5PT Reward Simulation Engine
//!
//! This crate implements the investment calculator behind the 5PT
//! dashboard: a day-by-day projection of reward accrual for a given
//! deposit and referral position.
//!
//! # Model Overview
//!
//! A deposit pays a 0.3% daily base reward on its (possibly compounded)
//! principal, plus shares of nine tiered reward pools and flat referral /
//! downline rewards on direct referral volume. Deposits are taxed 10% at
//! entry and claims 10% on the way out; the user either auto-compounds
//! every day or claims on a fixed schedule with a configurable reinvest
//! split.
//!
//! The engine approximates network-wide figures (burned volume, pool
//! participant counts) with fixed, overridable assumptions; it is a
//! projection tool, not a replica of the on-chain accounting.
//!
//! # Features
//!
//! - Pool tier catalog and eligibility evaluation
//! - Daily reward composition (base + pool + referral + downline)
//! - Auto-compound and scheduled claim/reinvest bookkeeping
//!
//! # Example
//!
//! ```
//! use fivept_core::SimulationAssumptions;
//! use rewards::{run_simulation, SimulationParameters};
//!
//! let params = SimulationParameters {
//!     investment_amount: 1000.0,
//!     referrals: 5,
//!     referral_volume: 5000.0,
//!     ..SimulationParameters::default()
//! };
//! let result = run_simulation(&params, &SimulationAssumptions::default()).unwrap();
//! println!("Projected ROI: {:.2}%", result.roi);
//! ```

pub mod calculator;
pub mod constants;
pub mod simulator;

pub use calculator::*;
pub use constants::*;
pub use fivept_core::{PoolId, SimulationAssumptions};
pub use simulator::*;

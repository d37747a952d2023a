//! Portfolio state and the monthly growth step
//!
//! A `PortfolioState` is the per-month vector of asset-class dollar values.
//! States are ephemeral: one exists per (profile, policy, window) run and is
//! discarded once the terminal total is read. The growth step is a pure
//! function; rebalancing (see [`crate::rebalance`]) is the only thing that
//! resets the asset-level split.

use serde::{Deserialize, Serialize};

use crate::model::{ReturnRecord, RiskProfile};

/// Per-asset dollar values and their cached sum for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioState {
    values: Vec<f64>,
    total: f64,
}

impl PortfolioState {
    /// Build a state from per-asset values, summing the total
    #[must_use]
    pub fn from_values(values: Vec<f64>) -> Self {
        let total = values.iter().sum();
        Self { values, total }
    }

    /// Per-asset dollar values in catalog order
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Total portfolio value
    #[must_use]
    pub fn total(&self) -> f64 {
        self.total
    }

    pub(crate) fn into_values(self) -> Vec<f64> {
        self.values
    }
}

/// A starting value plus the risk profile that splits it across assets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    starting_value: f64,
    profile: RiskProfile,
}

impl Portfolio {
    #[must_use]
    pub fn new(starting_value: f64, profile: RiskProfile) -> Self {
        Self {
            starting_value,
            profile,
        }
    }

    #[must_use]
    pub fn starting_value(&self) -> f64 {
        self.starting_value
    }

    #[must_use]
    pub fn profile(&self) -> &RiskProfile {
        &self.profile
    }

    /// The window-start state: the full starting value split by target weights
    #[must_use]
    pub fn initial_state(&self) -> PortfolioState {
        PortfolioState::from_values(
            self.profile
                .weights()
                .iter()
                .map(|w| self.starting_value * w)
                .collect(),
        )
    }
}

/// Apply one month's returns to a state, producing the next month's state.
///
/// Compounds each asset-class value by `1 + rate/100`. The compounding base
/// is always the asset-level value, never the total; that keeps drift honest
/// for the untouched portfolio and leaves redistribution entirely to the
/// rebalancing policy.
#[must_use]
pub fn step_month(prior: &PortfolioState, record: &ReturnRecord) -> PortfolioState {
    PortfolioState::from_values(
        prior
            .values()
            .iter()
            .zip(record.rates())
            .map(|(value, rate)| value * (1.0 + rate / 100.0))
            .collect(),
    )
}

//! Rebalancing policies
//!
//! Three disciplines applied to the freshly grown state after each monthly
//! step: leave it alone, pull it back to target weights every month, or pull
//! it back once every twelve months. Rebalancing redistributes the same
//! total across assets; it never creates or destroys value. A new cadence
//! (say, quarterly) is one more variant here, the simulation loop does not
//! change.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::portfolio::PortfolioState;

/// When, if ever, a portfolio is pulled back to its target weights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RebalancePolicy {
    /// Never rebalanced; asset values drift with their own returns
    None,
    /// Rebalanced after every monthly step
    Monthly,
    /// Rebalanced after every twelfth monthly step
    Annual,
}

impl RebalancePolicy {
    /// Does this policy fire at the given 1-based step index within a window?
    ///
    /// The annual policy fires exactly at steps 12, 24, 36, …
    #[must_use]
    pub fn applies_at(self, step: usize) -> bool {
        match self {
            RebalancePolicy::None => false,
            RebalancePolicy::Monthly => true,
            RebalancePolicy::Annual => step > 0 && step % 12 == 0,
        }
    }

    /// Apply the policy to a grown state at the given step.
    ///
    /// When the policy fires, the state's total is redistributed across
    /// assets by the target weights; otherwise the state passes through
    /// unchanged.
    #[must_use]
    pub fn apply(self, state: PortfolioState, step: usize, weights: &[f64]) -> PortfolioState {
        if self.applies_at(step) {
            rebalance(state, weights)
        } else {
            state
        }
    }

    /// All policies in report column order
    #[must_use]
    pub const fn all() -> [RebalancePolicy; 3] {
        [
            RebalancePolicy::None,
            RebalancePolicy::Monthly,
            RebalancePolicy::Annual,
        ]
    }
}

impl fmt::Display for RebalancePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RebalancePolicy::None => "untouched",
            RebalancePolicy::Monthly => "monthly",
            RebalancePolicy::Annual => "annual",
        };
        write!(f, "{label}")
    }
}

/// Redistribute a state's total across assets by target weights.
///
/// The total is carried over untouched; only the split changes.
fn rebalance(state: PortfolioState, weights: &[f64]) -> PortfolioState {
    let total = state.total();
    let mut values = state.into_values();
    for (value, weight) in values.iter_mut().zip(weights) {
        *value = total * weight;
    }
    PortfolioState::from_values(values)
}

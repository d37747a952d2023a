//! Risk profiles: named target-weight allocations across asset classes
//!
//! A profile is fixed for the lifetime of a run. Weights are aligned to a
//! catalog's ordering and validated once; rebalancing always redistributes
//! toward these targets.

use serde::{Deserialize, Serialize};

use crate::error::ProfileError;
use crate::model::AssetClassId;

/// Tolerance for the weights-sum-to-one check
const WEIGHT_SUM_EPSILON: f64 = 1e-6;

/// A named set of target weights over asset classes.
///
/// Weights are non-negative and sum to 1 within floating point tolerance,
/// one per catalog slot in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskProfile {
    name: String,
    weights: Vec<f64>,
}

impl RiskProfile {
    pub fn new(name: impl Into<String>, weights: Vec<f64>) -> Result<Self, ProfileError> {
        let name = name.into();
        for (index, &weight) in weights.iter().enumerate() {
            if !weight.is_finite() {
                return Err(ProfileError::NonFiniteWeight { name, index });
            }
            if weight < 0.0 {
                return Err(ProfileError::NegativeWeight {
                    name,
                    index,
                    weight,
                });
            }
        }
        let sum: f64 = weights.iter().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_EPSILON {
            return Err(ProfileError::WeightSumMismatch { name, sum });
        }
        Ok(Self { name, weights })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Target weights in catalog order
    #[must_use]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Target weight of one asset class (0 outside the catalog)
    #[must_use]
    pub fn weight(&self, id: AssetClassId) -> f64 {
        self.weights.get(id.0 as usize).copied().unwrap_or(0.0)
    }

    /// Number of weight slots; must match the series catalog to simulate
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    // =========================================================================
    // Presets for the five-class dataset
    // (large cap, small cap, international, bonds, cash — in that order)
    // =========================================================================
    // Equity allocations split 55% large cap, 15% small cap, 30% international.

    fn tiered(name: &str, equities: f64, bonds: f64, cash: f64) -> Self {
        let weights = vec![
            equities * 0.55,
            equities * 0.15,
            equities * 0.30,
            bonds,
            cash,
        ];
        // The tier fractions are constructed to sum to 1
        Self {
            name: name.to_string(),
            weights,
        }
    }

    /// 30% equities / 65% bonds / 5% cash
    #[must_use]
    pub fn conservative() -> Self {
        Self::tiered("conservative", 0.30, 0.65, 0.05)
    }

    /// 50% equities / 45% bonds / 5% cash
    #[must_use]
    pub fn moderate() -> Self {
        Self::tiered("moderate", 0.50, 0.45, 0.05)
    }

    /// 70% equities / 25% bonds / 5% cash
    #[must_use]
    pub fn aggressive() -> Self {
        Self::tiered("aggressive", 0.70, 0.25, 0.05)
    }

    /// Equal weight across `n` asset classes
    pub fn equal_weight(name: impl Into<String>, n: usize) -> Result<Self, ProfileError> {
        Self::new(name, vec![1.0 / n as f64; n])
    }
}

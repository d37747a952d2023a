//! Rolling-window portfolio rebalancing simulation library
//!
//! This crate answers: "if an investor of a given risk profile had started
//! investing at any historical month, what would the portfolio be worth
//! N years later?" — repeated for every valid starting month of a monthly
//! historical return dataset, under three rebalancing disciplines:
//! never rebalanced, rebalanced every month, rebalanced once per year.
//!
//! The engine owns no I/O. A loader hands it an ordered [`model::ReturnSeries`]
//! (validated once at construction); the engine hands back tabular
//! [`model::ComparisonTable`] results for a writer to emit.
//!
//! ```ignore
//! use windfall_core::model::{ReturnSeries, RiskProfile};
//! use windfall_core::rebalance::RebalancePolicy;
//! use windfall_core::simulation::compare_windows;
//!
//! let table = compare_windows(
//!     &series,
//!     10.0,
//!     &[RiskProfile::conservative(), RiskProfile::moderate(), RiskProfile::aggressive()],
//!     &RebalancePolicy::all(),
//!     10,
//! )?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod error;
pub mod portfolio;
pub mod rebalance;
pub mod simulation;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use error::{LookupError, ProfileError, RangeError, SeriesError, SimulationError};
pub use model::{
    AssetCatalog, AssetClassId, ComparisonRow, ComparisonTable, ReturnRecord, ReturnSeries,
    RiskProfile, RollingWindow,
};
pub use portfolio::{Portfolio, PortfolioState, step_month};
pub use rebalance::RebalancePolicy;
pub use simulation::{compare_windows, grow_assets_windows, simulate_window};

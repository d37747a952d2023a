//! The rolling comparison engine
//!
//! Runs one (portfolio, policy) simulation across a window, and fans the
//! full profile × policy grid out across every rolling window of a series.
//! Each window is a pure function of the immutable series plus its inputs,
//! so windows are simulated independently — in parallel when the `parallel`
//! feature is enabled — and collected back in window order.

use jiff::civil::Date;

use crate::error::SimulationError;
use crate::model::{ComparisonRow, ComparisonTable, ReturnSeries, RiskProfile, RollingWindow};
use crate::portfolio::{Portfolio, PortfolioState, step_month};
use crate::rebalance::RebalancePolicy;

#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

/// The dates one window's simulation visits: the first of the starting
/// month, then every representative day through the window's end.
fn window_range(
    series: &ReturnSeries,
    window: &RollingWindow,
) -> Result<Vec<Date>, SimulationError> {
    let entry = series.end_of_month(window.start)?;
    Ok(series.date_range(entry, window.end)?)
}

/// Simulate one portfolio under one policy across one window, returning the
/// terminal total value.
///
/// The walk starts from the portfolio's initial state at the first of the
/// starting month; each subsequent date grows the state by that month's
/// returns and then lets the policy rebalance. Step indices are 1-based, so
/// the annual policy fires at steps 12, 24, … An ad-hoc window whose
/// endpoints are not series dates fails loudly rather than truncating.
pub fn simulate_window(
    series: &ReturnSeries,
    portfolio: &Portfolio,
    policy: RebalancePolicy,
    window: &RollingWindow,
) -> Result<f64, SimulationError> {
    let expected = series.catalog().len();
    let found = portfolio.profile().len();
    if found != expected {
        return Err(SimulationError::ProfileArityMismatch { expected, found });
    }

    let range = window_range(series, window)?;
    let weights = portfolio.profile().weights();

    let mut state = portfolio.initial_state();
    for (i, date) in range[1..].iter().enumerate() {
        let grown = step_month(&state, series.return_of(*date)?);
        state = policy.apply(grown, i + 1, weights);
    }
    Ok(state.total())
}

/// Map windows to rows, in parallel when the `parallel` feature is on.
///
/// Rows come back in window order either way. Each window is an isolated
/// task; an error aborts only that window's computation, and the first one
/// is propagated out of the collected batch.
fn map_rows<F>(
    windows: &[RollingWindow],
    to_row: F,
) -> Result<Vec<ComparisonRow>, SimulationError>
where
    F: Fn(&RollingWindow) -> Result<ComparisonRow, SimulationError> + Send + Sync,
{
    #[cfg(feature = "parallel")]
    {
        windows.par_iter().map(to_row).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        windows.iter().map(to_row).collect()
    }
}

/// Compare rebalancing disciplines across every rolling window of a series.
///
/// For each window, each (policy, profile) pair is simulated from the same
/// starting value and its terminal total recorded. Column order is
/// policy-major over the caller's slices — with the three standard policies
/// and conservative/moderate/aggressive profiles this reproduces the
/// classic report layout (all untouched columns, then all monthly, then all
/// annual).
pub fn compare_windows(
    series: &ReturnSeries,
    starting_value: f64,
    profiles: &[RiskProfile],
    policies: &[RebalancePolicy],
    length_years: usize,
) -> Result<ComparisonTable, SimulationError> {
    let mut columns = Vec::with_capacity(policies.len() * profiles.len());
    for policy in policies {
        for profile in profiles {
            columns.push(format!("{} {}", profile.name(), policy));
        }
    }

    let portfolios: Vec<Portfolio> = profiles
        .iter()
        .map(|p| Portfolio::new(starting_value, p.clone()))
        .collect();

    let windows = series.rolling_windows(length_years);
    let rows = map_rows(&windows, |window| {
        let mut values = Vec::with_capacity(policies.len() * portfolios.len());
        for policy in policies {
            for portfolio in &portfolios {
                values.push(simulate_window(series, portfolio, *policy, window)?);
            }
        }
        Ok(ComparisonRow::new(*window, values))
    })?;

    Ok(ComparisonTable::new(columns, rows))
}

/// Track each asset class on its own across every rolling window.
///
/// Every class is seeded independently with the starting value and
/// compounded untouched, one report column per class — the growth/value
/// style-box comparison. No rebalancing is involved since the classes never
/// share a total.
pub fn grow_assets_windows(
    series: &ReturnSeries,
    starting_value: f64,
    length_years: usize,
) -> Result<ComparisonTable, SimulationError> {
    let columns = series.catalog().names().to_vec();
    let arity = series.catalog().len();

    let windows = series.rolling_windows(length_years);
    let rows = map_rows(&windows, |window| {
        let range = window_range(series, window)?;
        let mut state = PortfolioState::from_values(vec![starting_value; arity]);
        for date in &range[1..] {
            state = step_month(&state, series.return_of(*date)?);
        }
        Ok(ComparisonRow::new(*window, state.values().to_vec()))
    })?;

    Ok(ComparisonTable::new(columns, rows))
}

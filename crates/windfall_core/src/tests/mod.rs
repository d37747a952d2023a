//! Integration tests for the rolling comparison engine
//!
//! Tests are organized by topic:
//! - `series` - Series construction, calendar facts, rolling windows
//! - `rebalance` - Policy firing and redistribution across a window walk
//! - `simulation` - Single-window simulation, including the 60/40 scenario
//! - `comparison` - Full multi-profile, multi-policy comparison tables

use jiff::civil::Date;

use crate::model::{AssetCatalog, ReturnRecord, ReturnSeries};


/// Representative days (last day of month) for `count` months starting at
/// (`year`, `month`)
pub(crate) fn monthly_dates(year: i16, month: i8, count: usize) -> Vec<Date> {
    let (mut y, mut m) = (year, month);
    let mut dates = Vec::with_capacity(count);
    for _ in 0..count {
        dates.push(jiff::civil::date(y, m, 1).last_of_month());
        if m == 12 {
            y += 1;
            m = 1;
        } else {
            m += 1;
        }
    }
    dates
}

/// A series over the given asset class names where every month carries the
/// same rate vector
pub(crate) fn flat_series(
    names: &[&str],
    year: i16,
    month: i8,
    months: usize,
    rates: &[f64],
) -> ReturnSeries {
    let catalog = AssetCatalog::new(names.iter().copied()).unwrap();
    let records = monthly_dates(year, month, months)
        .into_iter()
        .map(|d| ReturnRecord::new(d, rates.to_vec()))
        .collect();
    ReturnSeries::new(catalog, records).unwrap()
}

/// A series where month `i` carries `rates_by_month[i]`
pub(crate) fn series_from_rates(
    names: &[&str],
    year: i16,
    month: i8,
    rates_by_month: &[Vec<f64>],
) -> ReturnSeries {
    let catalog = AssetCatalog::new(names.iter().copied()).unwrap();
    let records = monthly_dates(year, month, rates_by_month.len())
        .into_iter()
        .zip(rates_by_month)
        .map(|(d, rates)| ReturnRecord::new(d, rates.clone()))
        .collect();
    ReturnSeries::new(catalog, records).unwrap()
}

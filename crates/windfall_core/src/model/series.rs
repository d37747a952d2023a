//! The historical return series and its derived calendar facts
//!
//! A series is one monthly dataset: for every calendar month, the month's
//! representative day (the dataset's business-day convention, typically the
//! last business day) and one signed percent return per asset class. All
//! invariants are checked once at construction; the series is immutable
//! afterwards and safe to share read-only across worker threads.

use std::sync::{Arc, RwLock};

use jiff::civil::Date;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{LookupError, RangeError, SeriesError};
use crate::model::{AssetCatalog, AssetClassId, RollingWindow};

/// One calendar month's returns, keyed by the month's representative day.
///
/// Rates are signed percentages (`-3.2` means a 3.2% loss), one per catalog
/// asset class in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnRecord {
    date: Date,
    rates: Vec<f64>,
}

impl ReturnRecord {
    #[must_use]
    pub fn new(date: Date, rates: Vec<f64>) -> Self {
        Self { date, rates }
    }

    /// The representative day this record stands for
    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }

    /// Percent return of one asset class, if the id is within the catalog
    #[must_use]
    pub fn rate(&self, id: AssetClassId) -> Option<f64> {
        self.rates.get(id.0 as usize).copied()
    }

    /// All percent returns in catalog order
    #[must_use]
    pub fn rates(&self) -> &[f64] {
        &self.rates
    }
}

/// The calendar month after (year, month)
fn next_month(year: i16, month: i8) -> (i16, i8) {
    if month == 12 { (year + 1, 1) } else { (year, month + 1) }
}

/// An ordered monthly return dataset with cached calendar facts.
///
/// Construction validates the full invariant set (ascending dates, exactly
/// one record per calendar month with no gaps, consistent rate arity); every
/// later operation can therefore assume a well-formed series.
#[derive(Debug)]
pub struct ReturnSeries {
    catalog: AssetCatalog,
    records: Vec<ReturnRecord>,
    dates: Vec<Date>,
    index_by_date: FxHashMap<Date, usize>,
    index_by_month: FxHashMap<(i16, i8), usize>,
    /// Rolling windows memoized per requested length, computed on first use
    windows: RwLock<FxHashMap<usize, Arc<[RollingWindow]>>>,
}

impl ReturnSeries {
    /// Build a series from records already sorted by the loader.
    ///
    /// Fails with the matching [`SeriesError`] if the records are out of
    /// order, a month repeats or is missing, or a record's rate count does
    /// not match the catalog. A failed construction aborts the whole run;
    /// no downstream computation is sound against a malformed dataset.
    pub fn new(catalog: AssetCatalog, records: Vec<ReturnRecord>) -> Result<Self, SeriesError> {
        let arity = catalog.len();
        for record in &records {
            if record.rates.len() != arity {
                return Err(SeriesError::RateArityMismatch {
                    date: record.date,
                    expected: arity,
                    found: record.rates.len(),
                });
            }
        }

        for pair in records.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            if next.date <= prev.date {
                return Err(SeriesError::DatesOutOfOrder {
                    prev: prev.date,
                    next: next.date,
                });
            }
            if (next.date.year(), next.date.month()) == (prev.date.year(), prev.date.month()) {
                return Err(SeriesError::DuplicateMonth {
                    year: next.date.year(),
                    month: next.date.month(),
                });
            }
            if (next.date.year(), next.date.month())
                != next_month(prev.date.year(), prev.date.month())
            {
                return Err(SeriesError::MonthGap {
                    prev: prev.date,
                    next: next.date,
                });
            }
        }

        let dates: Vec<Date> = records.iter().map(|r| r.date).collect();
        let mut index_by_date = FxHashMap::default();
        let mut index_by_month = FxHashMap::default();
        for (i, date) in dates.iter().enumerate() {
            index_by_date.insert(*date, i);
            index_by_month.insert((date.year(), date.month()), i);
        }

        Ok(Self {
            catalog,
            records,
            dates,
            index_by_date,
            index_by_month,
            windows: RwLock::new(FxHashMap::default()),
        })
    }

    /// The asset class set this series was loaded against
    #[must_use]
    pub fn catalog(&self) -> &AssetCatalog {
        &self.catalog
    }

    /// Number of monthly records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All representative days, ascending
    #[must_use]
    pub fn ordered_dates(&self) -> &[Date] {
        &self.dates
    }

    /// The return record for a representative day
    pub fn return_of(&self, date: Date) -> Result<&ReturnRecord, LookupError> {
        self.index_by_date
            .get(&date)
            .map(|&i| &self.records[i])
            .ok_or(LookupError::DateNotFound(date))
    }

    /// First day of the month `date` falls in
    #[must_use]
    pub fn beginning_of_month(date: Date) -> Date {
        date.first_of_month()
    }

    /// The series' representative day for the month `date` falls in
    pub fn end_of_month(&self, date: Date) -> Result<Date, LookupError> {
        self.index_by_month
            .get(&(date.year(), date.month()))
            .map(|&i| self.dates[i])
            .ok_or(LookupError::MonthNotFound {
                year: date.year(),
                month: date.month(),
            })
    }

    /// The simulation walk for one window: the first of the starting month,
    /// then every representative day from `start` through `end` inclusive.
    ///
    /// Both endpoints must be representative days of the series.
    pub fn date_range(&self, start: Date, end: Date) -> Result<Vec<Date>, RangeError> {
        let start_idx = *self
            .index_by_date
            .get(&start)
            .ok_or(RangeError::EndpointNotInSeries(start))?;
        let end_idx = *self
            .index_by_date
            .get(&end)
            .ok_or(RangeError::EndpointNotInSeries(end))?;
        if start_idx > end_idx {
            return Err(RangeError::StartAfterEnd { start, end });
        }

        let mut range = Vec::with_capacity(end_idx - start_idx + 2);
        range.push(Self::beginning_of_month(start));
        range.extend_from_slice(&self.dates[start_idx..=end_idx]);
        Ok(range)
    }

    /// All rolling windows of `length_years`, memoized per length.
    ///
    /// Window `i` starts at the first of month `i`'s calendar month and ends
    /// at the representative day `(length_years - 1) * 12 + 11` records
    /// later, giving exactly `length_years * 12` monthly growth steps. The
    /// offset arithmetic is load-bearing: reports produced by this engine
    /// are comparable across runs only if it stays fixed.
    ///
    /// A series shorter than the minimum month count yields an empty slice.
    pub fn rolling_windows(&self, length_years: usize) -> Arc<[RollingWindow]> {
        if let Some(windows) = self.windows.read().unwrap().get(&length_years) {
            return windows.clone();
        }

        let computed: Arc<[RollingWindow]> = self.compute_windows(length_years).into();
        self.windows
            .write()
            .unwrap()
            .entry(length_years)
            .or_insert(computed)
            .clone()
    }

    fn compute_windows(&self, length_years: usize) -> Vec<RollingWindow> {
        if length_years == 0 {
            return Vec::new();
        }
        let end_offset = (length_years - 1) * 12 + 11;
        let mut windows = Vec::new();
        let mut i = 0;
        while i + end_offset < self.dates.len() {
            windows.push(RollingWindow::new(
                Self::beginning_of_month(self.dates[i]),
                self.dates[i + end_offset],
            ));
            i += 1;
        }
        windows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    fn two_class_catalog() -> AssetCatalog {
        AssetCatalog::new(["stocks", "bonds"]).unwrap()
    }

    #[test]
    fn test_next_month_rollover() {
        assert_eq!(next_month(1999, 12), (2000, 1));
        assert_eq!(next_month(2000, 1), (2000, 2));
    }

    #[test]
    fn test_month_gap_rejected() {
        let records = vec![
            ReturnRecord::new(date(1990, 1, 31), vec![1.0, 0.5]),
            ReturnRecord::new(date(1990, 3, 30), vec![1.0, 0.5]),
        ];
        let err = ReturnSeries::new(two_class_catalog(), records).unwrap_err();
        assert!(matches!(err, SeriesError::MonthGap { .. }));
    }

    #[test]
    fn test_duplicate_month_rejected() {
        let records = vec![
            ReturnRecord::new(date(1990, 1, 15), vec![1.0, 0.5]),
            ReturnRecord::new(date(1990, 1, 31), vec![1.0, 0.5]),
        ];
        let err = ReturnSeries::new(two_class_catalog(), records).unwrap_err();
        assert_eq!(
            err,
            SeriesError::DuplicateMonth {
                year: 1990,
                month: 1
            }
        );
    }

    #[test]
    fn test_out_of_order_rejected() {
        let records = vec![
            ReturnRecord::new(date(1990, 2, 28), vec![1.0, 0.5]),
            ReturnRecord::new(date(1990, 1, 31), vec![1.0, 0.5]),
        ];
        let err = ReturnSeries::new(two_class_catalog(), records).unwrap_err();
        assert!(matches!(err, SeriesError::DatesOutOfOrder { .. }));
    }

    #[test]
    fn test_arity_mismatch_rejected() {
        let records = vec![ReturnRecord::new(date(1990, 1, 31), vec![1.0])];
        let err = ReturnSeries::new(two_class_catalog(), records).unwrap_err();
        assert_eq!(
            err,
            SeriesError::RateArityMismatch {
                date: date(1990, 1, 31),
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_beginning_of_month() {
        assert_eq!(
            ReturnSeries::beginning_of_month(date(1990, 7, 31)),
            date(1990, 7, 1)
        );
    }
}

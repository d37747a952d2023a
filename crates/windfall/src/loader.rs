//! CSV dataset loader
//!
//! Turns a monthly return CSV into a validated [`ReturnSeries`]. The header
//! row names the asset-class columns after the leading date column; data
//! rows carry `m/d/yyyy` dates (the source datasets' convention) or ISO
//! `yyyy-mm-dd`. Every date string in the program is parsed here — the
//! engine only ever sees structured dates.

use std::fmt;
use std::path::Path;

use jiff::civil::Date;
use windfall_core::error::SeriesError;
use windfall_core::model::{AssetCatalog, ReturnRecord, ReturnSeries};

#[derive(Debug)]
pub enum LoaderError {
    Csv(csv::Error),
    /// The file has no header row naming the asset-class columns
    MissingHeader,
    BadDate { line: u64, value: String },
    BadRate { line: u64, column: String, value: String },
    ShortRow { line: u64, expected: usize, found: usize },
    Series(SeriesError),
}

impl fmt::Display for LoaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoaderError::Csv(e) => write!(f, "{e}"),
            LoaderError::MissingHeader => {
                write!(f, "dataset has no header row naming asset classes")
            }
            LoaderError::BadDate { line, value } => {
                write!(f, "line {line}: cannot parse date {value:?}")
            }
            LoaderError::BadRate {
                line,
                column,
                value,
            } => {
                write!(f, "line {line}: cannot parse {column} return {value:?}")
            }
            LoaderError::ShortRow {
                line,
                expected,
                found,
            } => {
                write!(
                    f,
                    "line {line}: expected {expected} columns, found {found}"
                )
            }
            LoaderError::Series(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LoaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoaderError::Csv(e) => Some(e),
            LoaderError::Series(e) => Some(e),
            _ => None,
        }
    }
}

impl From<csv::Error> for LoaderError {
    fn from(e: csv::Error) -> Self {
        LoaderError::Csv(e)
    }
}

impl From<SeriesError> for LoaderError {
    fn from(e: SeriesError) -> Self {
        LoaderError::Series(e)
    }
}

/// Parse a dataset date: `m/d/yyyy` first (one- or two-digit month and
/// day), ISO `yyyy-mm-dd` as a fallback
fn parse_date(value: &str) -> Option<Date> {
    Date::strptime("%m/%d/%Y", value)
        .or_else(|_| value.parse())
        .ok()
}

/// A furniture row the source datasets carry: empty date cell or a textual
/// label where the date belongs
fn is_furniture(date_field: &str) -> bool {
    date_field.is_empty() || date_field.chars().all(|c| c.is_alphabetic() || c == ' ')
}

/// Load a return series from a CSV file.
///
/// The header defines the catalog; data rows become records in file order
/// and the full invariant set (ordering, month coverage, arity) is checked
/// by [`ReturnSeries::new`].
pub fn load_series(path: &Path) -> Result<ReturnSeries, LoaderError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    if headers.len() < 2 {
        return Err(LoaderError::MissingHeader);
    }
    let names: Vec<String> = headers.iter().skip(1).map(str::trim).map(String::from).collect();
    let catalog = AssetCatalog::new(names.clone())?;
    let arity = catalog.len();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let line = row.position().map_or(0, |p| p.line());

        let date_field = row.get(0).unwrap_or("").trim();
        if is_furniture(date_field) {
            continue;
        }
        let date = parse_date(date_field).ok_or_else(|| LoaderError::BadDate {
            line,
            value: date_field.to_string(),
        })?;

        if row.len() < arity + 1 {
            return Err(LoaderError::ShortRow {
                line,
                expected: arity + 1,
                found: row.len(),
            });
        }

        let mut rates = Vec::with_capacity(arity);
        for (column, field) in names.iter().zip(row.iter().skip(1)) {
            let field = field.trim();
            let rate: f64 = field.parse().map_err(|_| LoaderError::BadRate {
                line,
                column: column.clone(),
                value: field.to_string(),
            })?;
            rates.push(rate);
        }
        records.push(ReturnRecord::new(date, rates));
    }

    Ok(ReturnSeries::new(catalog, records)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_dataset(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("returns.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_slash_dates() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_dataset(
            &dir,
            "date,large_cap,bonds\n\
             1/31/1979,4.42,1.93\n\
             2/28/1979,-2.85,-1.32\n\
             3/30/1979,5.75,1.07\n",
        );

        let series = load_series(&path).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.catalog().names(), &["large_cap", "bonds"]);
        assert_eq!(
            series.ordered_dates()[0],
            jiff::civil::date(1979, 1, 31)
        );
        let record = series
            .return_of(jiff::civil::date(1979, 2, 28))
            .unwrap();
        assert_eq!(record.rates(), &[-2.85, -1.32]);
    }

    #[test]
    fn test_furniture_rows_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_dataset(
            &dir,
            "date,a,b\n\
             ,,\n\
             Month End,,\n\
             2000-01-31,1.0,0.5\n\
             2000-02-29,0.3,0.2\n",
        );

        let series = load_series(&path).unwrap();
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn test_bad_rate_reported_with_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_dataset(
            &dir,
            "date,a,b\n\
             2000-01-31,1.0,n/a\n",
        );

        let err = load_series(&path).unwrap_err();
        match err {
            LoaderError::BadRate { column, value, .. } => {
                assert_eq!(column, "b");
                assert_eq!(value, "n/a");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_month_gap_rejected_at_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_dataset(
            &dir,
            "date,a,b\n\
             2000-01-31,1.0,0.5\n\
             2000-03-31,1.0,0.5\n",
        );

        let err = load_series(&path).unwrap_err();
        assert!(matches!(
            err,
            LoaderError::Series(SeriesError::MonthGap { .. })
        ));
    }
}

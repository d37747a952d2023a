use std::fmt;

use jiff::civil::Date;

/// Errors related to date lookups against a return series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupError {
    /// No record exists for the requested representative day
    DateNotFound(Date),
    /// No representative day exists for the requested calendar month
    MonthNotFound { year: i16, month: i8 },
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::DateNotFound(date) => {
                write!(f, "no return record for date {date}")
            }
            LookupError::MonthNotFound { year, month } => {
                write!(f, "no representative day for month {year:04}-{month:02}")
            }
        }
    }
}

impl std::error::Error for LookupError {}

/// Errors for malformed caller-supplied date ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    StartAfterEnd { start: Date, end: Date },
    /// A range endpoint is not a representative day of the series
    EndpointNotInSeries(Date),
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::StartAfterEnd { start, end } => {
                write!(f, "range start {start} is after end {end}")
            }
            RangeError::EndpointNotInSeries(date) => {
                write!(f, "range endpoint {date} is not in the series")
            }
        }
    }
}

impl std::error::Error for RangeError {}

/// Errors raised while constructing a return series.
///
/// These indicate a broken input dataset; nothing downstream is sound once
/// one of these fires, so they are never recovered from locally.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesError {
    EmptyCatalog,
    DuplicateAssetClass(String),
    DatesOutOfOrder { prev: Date, next: Date },
    DuplicateMonth { year: i16, month: i8 },
    MonthGap { prev: Date, next: Date },
    RateArityMismatch { date: Date, expected: usize, found: usize },
}

impl fmt::Display for SeriesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesError::EmptyCatalog => write!(f, "asset catalog has no asset classes"),
            SeriesError::DuplicateAssetClass(name) => {
                write!(f, "duplicate asset class {name:?} in catalog")
            }
            SeriesError::DatesOutOfOrder { prev, next } => {
                write!(f, "record dates out of order: {next} follows {prev}")
            }
            SeriesError::DuplicateMonth { year, month } => {
                write!(f, "more than one record for month {year:04}-{month:02}")
            }
            SeriesError::MonthGap { prev, next } => {
                write!(f, "gap in monthly records between {prev} and {next}")
            }
            SeriesError::RateArityMismatch {
                date,
                expected,
                found,
            } => {
                write!(
                    f,
                    "record {date} has {found} return rates, catalog has {expected} asset classes"
                )
            }
        }
    }
}

impl std::error::Error for SeriesError {}

/// Errors raised while constructing a risk profile
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileError {
    NonFiniteWeight { name: String, index: usize },
    NegativeWeight { name: String, index: usize, weight: f64 },
    /// Weights must sum to 1 within floating point tolerance
    WeightSumMismatch { name: String, sum: f64 },
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileError::NonFiniteWeight { name, index } => {
                write!(f, "risk profile {name:?} weight {index} is not finite")
            }
            ProfileError::NegativeWeight {
                name,
                index,
                weight,
            } => {
                write!(f, "risk profile {name:?} weight {index} is negative ({weight})")
            }
            ProfileError::WeightSumMismatch { name, sum } => {
                write!(f, "risk profile {name:?} weights sum to {sum}, expected 1")
            }
        }
    }
}

impl std::error::Error for ProfileError {}

/// Errors surfaced by the simulation entry points
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    Lookup(LookupError),
    Range(RangeError),
    /// The risk profile's weight count does not match the series catalog
    ProfileArityMismatch { expected: usize, found: usize },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::Lookup(e) => write!(f, "{e}"),
            SimulationError::Range(e) => write!(f, "{e}"),
            SimulationError::ProfileArityMismatch { expected, found } => {
                write!(
                    f,
                    "risk profile has {found} weights, series has {expected} asset classes"
                )
            }
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulationError::Lookup(e) => Some(e),
            SimulationError::Range(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LookupError> for SimulationError {
    fn from(e: LookupError) -> Self {
        SimulationError::Lookup(e)
    }
}

impl From<RangeError> for SimulationError {
    fn from(e: RangeError) -> Self {
        SimulationError::Range(e)
    }
}

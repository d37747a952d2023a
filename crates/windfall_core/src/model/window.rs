use std::fmt;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// One rolling period: a fixed-length slice of history repeated for every
/// valid starting month of the dataset.
///
/// `start` is the first day of the starting month; `end` is the
/// representative day of the final month, as present in the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RollingWindow {
    pub start: Date,
    pub end: Date,
}

impl RollingWindow {
    #[must_use]
    pub fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    /// Human-readable label used in report rows.
    ///
    /// Uses the window's first-of-month start date, not the end-of-month
    /// date the simulation actually enters at.
    #[must_use]
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RollingWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

//! Comparison tables produced by the rolling engine
//!
//! Plain data carriers handed to whatever writes or renders results. Values
//! are unrounded terminal dollar amounts.

use serde::{Deserialize, Serialize};

use crate::model::RollingWindow;

/// One rolling window's terminal totals, one value per table column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub window: RollingWindow,
    pub values: Vec<f64>,
}

impl ComparisonRow {
    #[must_use]
    pub fn new(window: RollingWindow, values: Vec<f64>) -> Self {
        Self { window, values }
    }

    /// The window label shown in the leading report column
    #[must_use]
    pub fn label(&self) -> String {
        self.window.label()
    }
}

/// A full rolling comparison: column names plus one row per window.
///
/// Columns name either `"{profile} {policy}"` combinations or asset classes,
/// depending on which report produced the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonTable {
    pub columns: Vec<String>,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    #[must_use]
    pub fn new(columns: Vec<String>, rows: Vec<ComparisonRow>) -> Self {
        Self { columns, rows }
    }

    /// Number of windows in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Terminal values of one column across all windows
    pub fn column(&self, name: &str) -> Option<Vec<f64>> {
        let idx = self.columns.iter().position(|c| c == name)?;
        Some(self.rows.iter().map(|r| r.values[idx]).collect())
    }
}

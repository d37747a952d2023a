//! CSV report writer
//!
//! Emits a comparison table as CSV: a `window` label column followed by one
//! column per profile × policy combination (or per asset class, for the
//! growth report). Terminal values are written unrounded.

use std::path::Path;

use windfall_core::model::ComparisonTable;

pub fn write_table(path: &Path, table: &ComparisonTable) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = Vec::with_capacity(table.columns.len() + 1);
    header.push("window".to_string());
    header.extend(table.columns.iter().cloned());
    writer.write_record(&header)?;

    for row in &table.rows {
        let mut record = Vec::with_capacity(row.values.len() + 1);
        record.push(row.label());
        record.extend(row.values.iter().map(f64::to_string));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;
    use windfall_core::model::{ComparisonRow, RollingWindow};

    #[test]
    fn test_written_table_round_trips() {
        let table = ComparisonTable::new(
            vec!["low untouched".to_string(), "low monthly".to_string()],
            vec![ComparisonRow::new(
                RollingWindow::new(date(1979, 1, 1), date(2004, 12, 31)),
                vec![112.6, 112.36],
            )],
        );

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_table(&path, &table).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("window,low untouched,low monthly"));
        assert_eq!(
            lines.next(),
            Some("1979-01-01 - 2004-12-31,112.6,112.36")
        );
        assert_eq!(lines.next(), None);
    }
}

//! Running Sum Report
//!
//! Emits a cumulative total per selected record, in the order the records
//! arrive. Accumulation happens in cents; only the emitted values are
//! converted to major units.

use std::io::Write;

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::models::{AccountRecord, Money, RecordQuery};
use crate::services::RecordFilter;

/// Running Sum Report
///
/// `dates` and `values` are parallel: `values[i]` is the cumulative total
/// including the record dated `dates[i]`, in major units.
#[derive(Debug, Clone, PartialEq)]
pub struct RunningSumReport {
    /// One entry per selected record, input order preserved
    pub dates: Vec<NaiveDate>,
    /// Cumulative totals in major units
    pub values: Vec<f64>,
}

impl RunningSumReport {
    /// Generate a running sum report for the records a query selects
    ///
    /// An empty selection yields two empty sequences.
    pub fn generate(records: &[AccountRecord], query: &RecordQuery) -> Self {
        let filter = RecordFilter::from_query(query);
        let selected = filter.apply(records);

        let mut dates = Vec::with_capacity(selected.len());
        let mut values = Vec::with_capacity(selected.len());

        let mut total = Money::zero();
        for record in selected {
            total += record.signed_value(query.invert);
            dates.push(record.date);
            values.push(total.to_major_units());
        }

        Self { dates, values }
    }

    /// Check whether the report holds any points
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// The final cumulative value, if any record was selected
    pub fn final_value(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        if self.is_empty() {
            return "No records in range.\n".to_string();
        }

        let mut output = String::new();
        output.push_str(&format!("{:<12} {:>14}\n", "Date", "Total"));
        output.push_str(&"-".repeat(27));
        output.push('\n');

        for (date, value) in self.dates.iter().zip(&self.values) {
            output.push_str(&format!("{:<12} {:>14.2}\n", date.format("%Y-%m-%d"), value));
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(writer, "Date,Total").map_err(|e| Error::Export(e.to_string()))?;

        for (date, value) in self.dates.iter().zip(&self.values) {
            writeln!(writer, "{},{:.2}", date.format("%Y-%m-%d"), value)
                .map_err(|e| Error::Export(e.to_string()))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: (i32, u32, u32), cents: i64, labels: &[&str]) -> AccountRecord {
        let mut r = AccountRecord::new(
            "alice",
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            Money::from_cents(cents),
        );
        r.labels = labels.iter().map(|l| l.to_string()).collect();
        r
    }

    fn food_query() -> RecordQuery {
        RecordQuery::new()
            .with_labels(vec!["food".to_string()])
            .after(NaiveDate::from_ymd_opt(2023, 12, 31).unwrap())
            .before(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
    }

    #[test]
    fn test_running_totals() {
        let records = vec![
            record((2024, 1, 10), 1000, &["food"]),
            record((2024, 2, 5), 500, &["food"]),
        ];

        let report = RunningSumReport::generate(&records, &food_query());
        assert_eq!(
            report.dates,
            vec![
                NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
                NaiveDate::from_ymd_opt(2024, 2, 5).unwrap(),
            ]
        );
        assert_eq!(report.values, vec![10.0, 15.0]);
    }

    #[test]
    fn test_empty_selection_yields_empty_sequences() {
        let records = vec![record((2024, 1, 10), 1000, &["rent"])];
        let report = RunningSumReport::generate(&records, &food_query());
        assert!(report.is_empty());
        assert!(report.values.is_empty());
        assert_eq!(report.final_value(), None);
    }

    #[test]
    fn test_final_value_is_signed_total() {
        let records = vec![
            record((2024, 1, 10), 1000, &["food"]),
            record((2024, 1, 15), -250, &["food"]),
            record((2024, 2, 5), 500, &["food"]),
        ];

        let report = RunningSumReport::generate(&records, &food_query());
        assert_eq!(report.final_value(), Some(12.5));

        let inverted = RunningSumReport::generate(&records, &food_query().inverted());
        assert_eq!(inverted.final_value(), Some(-12.5));
    }

    #[test]
    fn test_order_is_preserved() {
        // Input deliberately not date-sorted; the report keeps input order
        let records = vec![
            record((2024, 2, 5), 500, &["food"]),
            record((2024, 1, 10), 1000, &["food"]),
        ];

        let report = RunningSumReport::generate(&records, &food_query());
        assert_eq!(report.values, vec![5.0, 15.0]);
        assert_eq!(
            report.dates[0],
            NaiveDate::from_ymd_opt(2024, 2, 5).unwrap()
        );
    }

    #[test]
    fn test_skipped_records_are_excluded() {
        let records = vec![
            record((2024, 1, 10), 1000, &["food"]),
            record((2024, 1, 12), 9999, &["food", "SKIP"]),
        ];

        let report = RunningSumReport::generate(&records, &food_query());
        assert_eq!(report.values, vec![10.0]);
    }

    #[test]
    fn test_export_csv() {
        let records = vec![record((2024, 1, 10), 1000, &["food"])];
        let report = RunningSumReport::generate(&records, &food_query());

        let mut buf = Vec::new();
        report.export_csv(&mut buf).unwrap();
        let csv = String::from_utf8(buf).unwrap();
        assert!(csv.contains("2024-01-10,10.00"));
    }
}

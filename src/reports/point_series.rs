//! Point Series Report
//!
//! Emits one point per selected record, carrying the record's own value and
//! a human-readable label. No accumulation, no bucketing.

use std::io::Write;

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::models::{AccountRecord, RecordQuery};
use crate::services::RecordFilter;

/// A single record rendered as a chart point
#[derive(Debug, Clone, PartialEq)]
pub struct RecordPoint {
    /// Booking date
    pub date: NaiveDate,
    /// Signed value in major units
    pub value: f64,
    /// Comment if non-empty, otherwise the purpose
    pub label: String,
}

/// Point Series Report
#[derive(Debug, Clone, PartialEq)]
pub struct PointSeriesReport {
    /// One point per selected record, input order preserved
    pub points: Vec<RecordPoint>,
}

impl PointSeriesReport {
    /// Generate a point series for the records a query selects
    pub fn generate(records: &[AccountRecord], query: &RecordQuery) -> Self {
        let filter = RecordFilter::from_query(query);
        let selected = filter.apply(records);

        let points = selected
            .into_iter()
            .map(|record| RecordPoint {
                date: record.date,
                value: record.signed_value(query.invert).to_major_units(),
                label: record.display_label().to_string(),
            })
            .collect();

        Self { points }
    }

    /// Check whether the report holds any points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        if self.is_empty() {
            return "No records in range.\n".to_string();
        }

        let mut output = String::new();
        output.push_str(&format!("{:<12} {:>14} {}\n", "Date", "Value", "Label"));
        output.push_str(&"-".repeat(50));
        output.push('\n');

        for point in &self.points {
            output.push_str(&format!(
                "{:<12} {:>14.2} {}\n",
                point.date.format("%Y-%m-%d"),
                point.value,
                point.label
            ));
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(writer, "Date,Value,Label").map_err(|e| Error::Export(e.to_string()))?;

        for point in &self.points {
            writeln!(
                writer,
                "{},{:.2},{}",
                point.date.format("%Y-%m-%d"),
                point.value,
                point.label
            )
            .map_err(|e| Error::Export(e.to_string()))?;
        }

        Ok(())
    }
}

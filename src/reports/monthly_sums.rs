//! Monthly Sum Report
//!
//! Sums the selected records into one bucket per calendar month. The bucket
//! sequence is derived from the query window clamped to the actual data
//! extent, so two reports over the same records line up bucket for bucket.

use std::io::Write;

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::models::{AccountRecord, Money, RecordQuery};
use crate::services::dates::{month_end, month_key, next_month_start};
use crate::services::RecordFilter;

/// Monthly Sum Report
///
/// `buckets` and `sums` are parallel: `sums[i]` is the total for the month
/// labelled `buckets[i]`, in major units.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySumReport {
    /// Year-month labels, e.g. "2024-01"
    pub buckets: Vec<String>,
    /// Per-bucket totals in major units
    pub sums: Vec<f64>,
}

impl MonthlySumReport {
    /// Generate a monthly sum report for the records a query selects
    ///
    /// Label and spender criteria apply, but the query dates only clamp the
    /// bucket window. Data extent is discovered from the matching records
    /// themselves, so bucket boundaries never fall outside it.
    pub fn generate(records: &[AccountRecord], query: &RecordQuery) -> Result<Self> {
        let filter = RecordFilter::from_query_unbounded(query);
        let mut selected = filter.apply(records);
        selected.sort_by_key(|r| r.date);

        if selected.is_empty() {
            return Ok(Self {
                buckets: Vec::new(),
                sums: Vec::new(),
            });
        }

        let earliest = selected[0].date;
        let latest = selected[selected.len() - 1].date;

        let effective_start = query.start_date.max(earliest);
        let effective_end = query.end_date.min(latest);

        let mut buckets = Vec::new();
        let mut ranges: Vec<(NaiveDate, NaiveDate)> = Vec::new();

        let mut cursor = effective_start;
        while cursor <= effective_end {
            let bucket_end = month_end(cursor).min(effective_end);
            buckets.push(month_key(bucket_end));
            ranges.push((cursor, bucket_end));
            cursor = next_month_start(cursor);
        }

        if buckets.len() < 2 {
            return Err(Error::Config(
                "Date range must be at least one month".to_string(),
            ));
        }

        let sums = ranges
            .iter()
            .map(|&(start, end)| {
                let total: Money = selected
                    .iter()
                    .filter(|r| r.date >= start && r.date <= end)
                    .map(|r| r.signed_value(query.invert))
                    .sum();
                total.to_major_units()
            })
            .collect();

        Ok(Self { buckets, sums })
    }

    /// Check whether the report holds any buckets
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        if self.is_empty() {
            return "No records in range.\n".to_string();
        }

        let mut output = String::new();
        output.push_str(&format!("{:<10} {:>14}\n", "Month", "Sum"));
        output.push_str(&"-".repeat(25));
        output.push('\n');

        for (bucket, sum) in self.buckets.iter().zip(&self.sums) {
            output.push_str(&format!("{:<10} {:>14.2}\n", bucket, sum));
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(writer, "Month,Sum").map_err(|e| Error::Export(e.to_string()))?;

        for (bucket, sum) in self.buckets.iter().zip(&self.sums) {
            writeln!(writer, "{},{:.2}", bucket, sum)
                .map_err(|e| Error::Export(e.to_string()))?;
        }

        Ok(())
    }
}

//! Label Usage Report
//!
//! Counts how often each label occurs across the selected records. A record
//! carrying several labels contributes to each of them.

use std::collections::BTreeMap;
use std::io::Write;

use crate::error::{Error, Result};
use crate::models::{AccountRecord, RecordQuery};
use crate::services::RecordFilter;

/// A single label with its occurrence count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelCount {
    /// Label name
    pub label: String,
    /// Number of selected records carrying the label
    pub count: usize,
}

/// Label Usage Report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelUsageReport {
    /// Labels with counts, alphabetical until re-sorted
    pub entries: Vec<LabelCount>,
}

impl LabelUsageReport {
    /// Generate a label usage report for the records a query selects
    pub fn generate(records: &[AccountRecord], query: &RecordQuery) -> Self {
        let filter = RecordFilter::from_query(query);
        let selected = filter.apply(records);

        // BTreeMap gives the deterministic alphabetical base order
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for record in selected {
            for label in &record.labels {
                *counts.entry(label.as_str()).or_insert(0) += 1;
            }
        }

        let entries = counts
            .into_iter()
            .map(|(label, count)| LabelCount {
                label: label.to_string(),
                count,
            })
            .collect();

        Self { entries }
    }

    /// Re-sort entries ascending by count, keeping alphabetical order
    /// within equal counts
    pub fn sort_by_count(&mut self) {
        self.entries.sort_by_key(|e| e.count);
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        if self.entries.is_empty() {
            return "No labels in use.\n".to_string();
        }

        let mut output = String::new();
        output.push_str(&format!("{:<30} {:>8}\n", "Label", "Count"));
        output.push_str(&"-".repeat(39));
        output.push('\n');

        for entry in &self.entries {
            output.push_str(&format!("{:<30} {:>8}\n", entry.label, entry.count));
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(writer, "Label,Count").map_err(|e| Error::Export(e.to_string()))?;

        for entry in &self.entries {
            writeln!(writer, "{},{}", entry.label, entry.count)
                .map_err(|e| Error::Export(e.to_string()))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn record(day: u32, labels: &[&str]) -> AccountRecord {
        let mut r = AccountRecord::new(
            "alice",
            NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            Money::from_cents(1000),
        );
        r.labels = labels.iter().map(|l| l.to_string()).collect();
        r
    }

    #[test]
    fn test_counts_are_per_occurrence() {
        let records = vec![
            record(5, &["food", "travel"]),
            record(10, &["food"]),
            record(15, &["rent"]),
        ];

        let report = LabelUsageReport::generate(&records, &RecordQuery::new());
        assert_eq!(
            report.entries,
            vec![
                LabelCount { label: "food".to_string(), count: 2 },
                LabelCount { label: "rent".to_string(), count: 1 },
                LabelCount { label: "travel".to_string(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_base_order_is_alphabetical() {
        let records = vec![record(5, &["zoo", "alpha", "mid"])];
        let report = LabelUsageReport::generate(&records, &RecordQuery::new());

        let labels: Vec<&str> = report.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["alpha", "mid", "zoo"]);
    }

    #[test]
    fn test_sort_by_count_keeps_alphabetical_ties() {
        let records = vec![
            record(5, &["food"]),
            record(6, &["food"]),
            record(7, &["beta"]),
            record(8, &["alpha"]),
        ];

        let mut report = LabelUsageReport::generate(&records, &RecordQuery::new());
        report.sort_by_count();

        let labels: Vec<&str> = report.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["alpha", "beta", "food"]);
        assert_eq!(report.entries[2].count, 2);
    }

    #[test]
    fn test_skipped_records_do_not_count() {
        let records = vec![record(5, &["food", "SKIP"]), record(6, &["food"])];
        let report = LabelUsageReport::generate(&records, &RecordQuery::new());

        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.entries[0].count, 1);
    }

    #[test]
    fn test_format_terminal_empty() {
        let report = LabelUsageReport::generate(&[], &RecordQuery::new());
        assert!(report.format_terminal().contains("No labels in use"));
    }

    #[test]
    fn test_export_csv() {
        let records = vec![record(5, &["food"])];
        let report = LabelUsageReport::generate(&records, &RecordQuery::new());

        let mut buf = Vec::new();
        report.export_csv(&mut buf).unwrap();
        let csv = String::from_utf8(buf).unwrap();
        assert!(csv.starts_with("Label,Count\n"));
        assert!(csv.contains("food,1"));
    }
}

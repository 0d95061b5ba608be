//! Record display formatting
//!
//! Maps account records onto display rows for terminal output, truncating
//! free-text fields to a configured length.

use crate::config::Settings;
use crate::models::AccountRecord;

/// A record prepared for display
#[derive(Debug, Clone, PartialEq)]
pub struct RecordRow {
    /// Account holder name
    pub spender: String,
    /// Date formatted per settings
    pub date: String,
    /// Signed value in major units
    pub value: f64,
    /// Truncated counterparty
    pub receiver: String,
    /// Truncated purpose line
    pub purpose: String,
    /// Truncated comment
    pub comment: String,
}

impl RecordRow {
    /// Build a display row from a record
    pub fn from_record(record: &AccountRecord, settings: &Settings, invert: bool) -> Self {
        Self {
            spender: record.spender.clone(),
            date: record.date.format(&settings.date_format).to_string(),
            value: record.signed_value(invert).to_major_units(),
            receiver: truncate(&record.receiver, settings.truncate_length),
            purpose: truncate(&record.purpose, settings.truncate_length),
            comment: truncate(&record.comment, settings.truncate_length),
        }
    }
}

/// Format display rows as a plain aligned table
pub fn format_record_table(rows: &[RecordRow]) -> String {
    if rows.is_empty() {
        return "No records found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12} {:<12} {:>12} {:<25} {:<25} {:<25}\n",
        "Spender", "Date", "Value", "Receiver", "Purpose", "Comment"
    ));
    output.push_str(&"-".repeat(116));
    output.push('\n');

    for row in rows {
        output.push_str(&format!(
            "{:<12} {:<12} {:>12.2} {:<25} {:<25} {:<25}\n",
            row.spender, row.date, row.value, row.receiver, row.purpose, row.comment
        ));
    }

    output
}

/// Truncate a string to a maximum length in characters
///
/// The returned string, ellipsis marker included, never exceeds `max_len`.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

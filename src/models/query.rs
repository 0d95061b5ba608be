//! Record query model
//!
//! An immutable value object describing which records a report should cover
//! and how their values are interpreted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Query describing a report's record selection
///
/// Date bounds are exclusive on both ends. The defaults span 2000 through
/// 2050, wide enough to cover any realistic import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordQuery {
    /// Labels to match; a record qualifies when it shares at least one.
    /// `None` or an empty list matches every record.
    #[serde(default)]
    pub labels: Option<Vec<String>>,

    /// Restrict to records of this spender (exact match)
    #[serde(default)]
    pub spender: Option<String>,

    /// Records must be dated strictly after this date
    #[serde(default = "default_start_date")]
    pub start_date: NaiveDate,

    /// Records must be dated strictly before this date
    #[serde(default = "default_end_date")]
    pub end_date: NaiveDate,

    /// Flip the sign of every value, so expense-oriented charts point up
    #[serde(default)]
    pub invert: bool,

    /// Series label for charts; falls back to the query position
    #[serde(default)]
    pub plot_label: Option<String>,
}

fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 31).unwrap()
}

fn default_end_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2050, 1, 31).unwrap()
}

impl Default for RecordQuery {
    fn default() -> Self {
        Self {
            labels: None,
            spender: None,
            start_date: default_start_date(),
            end_date: default_end_date(),
            invert: false,
            plot_label: None,
        }
    }
}

impl RecordQuery {
    /// Create a query matching every record
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to records carrying at least one of the given labels
    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = Some(labels);
        self
    }

    /// Restrict to records of the given spender
    pub fn with_spender(mut self, spender: impl Into<String>) -> Self {
        self.spender = Some(spender.into());
        self
    }

    /// Set the exclusive start bound
    pub fn after(mut self, date: NaiveDate) -> Self {
        self.start_date = date;
        self
    }

    /// Set the exclusive end bound
    pub fn before(mut self, date: NaiveDate) -> Self {
        self.end_date = date;
        self
    }

    /// Flip the sign of every value in the result
    pub fn inverted(mut self) -> Self {
        self.invert = true;
        self
    }

    /// Set the chart series label
    pub fn with_plot_label(mut self, label: impl Into<String>) -> Self {
        self.plot_label = Some(label.into());
        self
    }
}

//! Account record model
//!
//! Represents a single dated transaction as imported from an account source,
//! carrying free-text fields and a set of user-assigned labels.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Money;

/// Reserved label that excludes a record from all filtering and aggregation
pub const SKIP_LABEL: &str = "SKIP";

/// A single imported transaction record
///
/// Values are stored as they arrive from the source: positive amounts are
/// inflows. Reports apply inversion on top when a query asks for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    /// Name of the account holder the record was imported for
    pub spender: String,

    /// Booking date
    pub date: NaiveDate,

    /// Transaction amount in minor units
    pub value: Money,

    /// Counterparty name
    #[serde(default)]
    pub receiver: String,

    /// Purpose line from the source
    #[serde(default)]
    pub purpose: String,

    /// User-supplied comment
    #[serde(default)]
    pub comment: String,

    /// User-assigned labels (sorted, deduplicated)
    #[serde(default)]
    pub labels: BTreeSet<String>,
}

impl AccountRecord {
    /// Create a record with the core fields; free-text fields start empty
    pub fn new(spender: impl Into<String>, date: NaiveDate, value: Money) -> Self {
        Self {
            spender: spender.into(),
            date,
            value,
            receiver: String::new(),
            purpose: String::new(),
            comment: String::new(),
            labels: BTreeSet::new(),
        }
    }

    /// Check whether the record carries the given label
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    /// Check whether the record is tagged with the reserved skip label
    ///
    /// Skipped records are excluded from every report regardless of any
    /// other label they carry.
    pub fn is_skipped(&self) -> bool {
        self.labels.contains(SKIP_LABEL)
    }

    /// Human-readable label for plotting: the comment if non-empty,
    /// otherwise the purpose
    pub fn display_label(&self) -> &str {
        if self.comment.is_empty() {
            &self.purpose
        } else {
            &self.comment
        }
    }

    /// The record value with query inversion applied
    pub fn signed_value(&self, invert: bool) -> Money {
        self.value.signed(invert)
    }
}

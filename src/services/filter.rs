//! Record filtering
//!
//! The single selection predicate every report runs on. Filtering is pure:
//! it borrows the input slice and never reorders it.

use chrono::NaiveDate;

use crate::models::{AccountRecord, RecordQuery};

/// Filter criteria for selecting account records
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    /// Labels to match; empty or absent matches every record
    pub labels: Option<Vec<String>>,
    /// Restrict to this spender (exact match)
    pub spender: Option<String>,
    /// Records must be dated strictly after this date
    pub after: Option<NaiveDate>,
    /// Records must be dated strictly before this date
    pub before: Option<NaiveDate>,
}

impl RecordFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter applying all of a query's criteria
    pub fn from_query(query: &RecordQuery) -> Self {
        Self {
            labels: query.labels.clone(),
            spender: query.spender.clone(),
            after: Some(query.start_date),
            before: Some(query.end_date),
        }
    }

    /// Build a filter applying only a query's label and spender criteria,
    /// leaving the date window open
    ///
    /// Used when a report needs the full data extent before clamping to the
    /// query's date range.
    pub fn from_query_unbounded(query: &RecordQuery) -> Self {
        Self {
            labels: query.labels.clone(),
            spender: query.spender.clone(),
            after: None,
            before: None,
        }
    }

    /// Check whether a record satisfies every criterion
    ///
    /// Records tagged with the skip label never match, regardless of the
    /// other labels they carry.
    pub fn matches(&self, record: &AccountRecord) -> bool {
        if record.is_skipped() {
            return false;
        }

        if let Some(labels) = &self.labels {
            if !labels.is_empty() && !labels.iter().any(|l| record.has_label(l)) {
                return false;
            }
        }

        if let Some(spender) = &self.spender {
            if record.spender != *spender {
                return false;
            }
        }

        if let Some(after) = self.after {
            if record.date <= after {
                return false;
            }
        }

        if let Some(before) = self.before {
            if record.date >= before {
                return false;
            }
        }

        true
    }

    /// Select matching records, preserving input order
    ///
    /// An empty result is a valid outcome, not an error.
    pub fn apply<'a>(&self, records: &'a [AccountRecord]) -> Vec<&'a AccountRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, SKIP_LABEL};

    fn record(date: (i32, u32, u32), cents: i64, labels: &[&str]) -> AccountRecord {
        let mut r = AccountRecord::new(
            "alice",
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            Money::from_cents(cents),
        );
        r.labels = labels.iter().map(|l| l.to_string()).collect();
        r
    }

    #[test]
    fn test_label_intersection() {
        let filter = RecordFilter {
            labels: Some(vec!["food".to_string(), "travel".to_string()]),
            ..Default::default()
        };

        assert!(filter.matches(&record((2024, 1, 10), 1000, &["food"])));
        assert!(filter.matches(&record((2024, 1, 10), 1000, &["travel", "work"])));
        assert!(!filter.matches(&record((2024, 1, 10), 1000, &["rent"])));
        assert!(!filter.matches(&record((2024, 1, 10), 1000, &[])));
    }

    #[test]
    fn test_empty_labels_match_all() {
        let filter = RecordFilter {
            labels: Some(vec![]),
            ..Default::default()
        };
        assert!(filter.matches(&record((2024, 1, 10), 1000, &[])));

        let filter = RecordFilter::new();
        assert!(filter.matches(&record((2024, 1, 10), 1000, &["anything"])));
    }

    #[test]
    fn test_skip_label_always_excludes() {
        let filter = RecordFilter {
            labels: Some(vec!["food".to_string()]),
            ..Default::default()
        };

        // Carries a matching label but is skipped
        assert!(!filter.matches(&record((2024, 1, 10), 1000, &["food", SKIP_LABEL])));

        // Skipped records don't match even an unrestricted filter
        assert!(!RecordFilter::new().matches(&record((2024, 1, 10), 1000, &[SKIP_LABEL])));
    }

    #[test]
    fn test_spender_exact_match() {
        let filter = RecordFilter {
            spender: Some("alice".to_string()),
            ..Default::default()
        };

        assert!(filter.matches(&record((2024, 1, 10), 1000, &[])));

        let mut other = record((2024, 1, 10), 1000, &[]);
        other.spender = "Alice".to_string();
        assert!(!filter.matches(&other));
    }

    #[test]
    fn test_date_bounds_are_exclusive() {
        let filter = RecordFilter {
            after: Some(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()),
            before: Some(NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()),
            ..Default::default()
        };

        assert!(!filter.matches(&record((2024, 1, 10), 1000, &[])));
        assert!(filter.matches(&record((2024, 1, 11), 1000, &[])));
        assert!(filter.matches(&record((2024, 1, 19), 1000, &[])));
        assert!(!filter.matches(&record((2024, 1, 20), 1000, &[])));
    }

    #[test]
    fn test_apply_preserves_order() {
        let records = vec![
            record((2024, 2, 5), 500, &["food"]),
            record((2024, 1, 10), 1000, &["food"]),
            record((2024, 1, 15), 700, &["rent"]),
        ];

        let filter = RecordFilter {
            labels: Some(vec!["food".to_string()]),
            ..Default::default()
        };
        let selected = filter.apply(&records);

        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].date, NaiveDate::from_ymd_opt(2024, 2, 5).unwrap());
        assert_eq!(selected[1].date, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
    }

    #[test]
    fn test_apply_empty_result_is_ok() {
        let records = vec![record((2024, 1, 10), 1000, &["rent"])];
        let filter = RecordFilter {
            labels: Some(vec!["food".to_string()]),
            ..Default::default()
        };
        assert!(filter.apply(&records).is_empty());
    }

    #[test]
    fn test_from_query() {
        let query = crate::models::RecordQuery::new()
            .with_labels(vec!["food".to_string()])
            .after(NaiveDate::from_ymd_opt(2023, 12, 31).unwrap())
            .before(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());

        let filter = RecordFilter::from_query(&query);
        assert_eq!(filter.after, Some(NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()));
        assert_eq!(filter.before, Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));

        let unbounded = RecordFilter::from_query_unbounded(&query);
        assert!(unbounded.after.is_none());
        assert!(unbounded.before.is_none());
        assert_eq!(unbounded.labels, Some(vec!["food".to_string()]));
    }
}

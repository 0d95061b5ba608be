//! Record sorting
//!
//! Stable sorting of filtered record lists by a caller-named field.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::error::Error;
use crate::models::AccountRecord;

/// Field to sort records by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Spender,
    Date,
    Value,
    Receiver,
    Purpose,
    Comment,
}

impl SortField {
    /// Compare two records by this field
    fn compare(&self, a: &AccountRecord, b: &AccountRecord) -> Ordering {
        match self {
            Self::Spender => a.spender.cmp(&b.spender),
            Self::Date => a.date.cmp(&b.date),
            Self::Value => a.value.cmp(&b.value),
            Self::Receiver => a.receiver.cmp(&b.receiver),
            Self::Purpose => a.purpose.cmp(&b.purpose),
            Self::Comment => a.comment.cmp(&b.comment),
        }
    }
}

impl FromStr for SortField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spender" => Ok(Self::Spender),
            "date" => Ok(Self::Date),
            "value" => Ok(Self::Value),
            "receiver" => Ok(Self::Receiver),
            "purpose" => Ok(Self::Purpose),
            "comment" => Ok(Self::Comment),
            other => Err(Error::Config(format!("Unknown sort field: {}", other))),
        }
    }
}

/// Sort records in place by the given field
///
/// The sort is stable: records comparing equal keep their relative order.
/// `None` leaves the input order untouched.
pub fn sort_records(records: &mut Vec<&AccountRecord>, field: Option<SortField>, reverse: bool) {
    if let Some(field) = field {
        records.sort_by(|a, b| field.compare(a, b));
        if reverse {
            records.reverse();
        }
    }
}

//! Core data models for finmon
//!
//! This module contains the data structures that represent the monitoring
//! domain: monetary amounts, imported account records, and report queries.

pub mod money;
pub mod query;
pub mod record;

pub use money::{Money, MoneyParseError};
pub use query::RecordQuery;
pub use record::{AccountRecord, SKIP_LABEL};

//! Service layer for finmon
//!
//! Pure record-level operations the reports build on: filtering, sorting,
//! and calendar-month arithmetic.

pub mod dates;
pub mod filter;
pub mod sort;

pub use filter::RecordFilter;
pub use sort::{sort_records, SortField};

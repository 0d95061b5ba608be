//! Display formatting for terminal output
//!
//! Provides utilities for formatting records for terminal display.

pub mod record;

pub use record::{format_record_table, truncate, RecordRow};

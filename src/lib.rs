//! finmon - Transaction aggregation and reporting
//!
//! This library aggregates dated account records into time-bucketed and
//! category-bucketed summaries for reporting and charting. It owns the
//! filtering, aggregation, and formatting logic; importing raw data and
//! drawing charts happen behind traits implemented by the caller.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Presentation settings
//! - `error`: Custom error types
//! - `models`: Core data models (money, records, queries)
//! - `services`: Filtering, sorting, and date helpers
//! - `import`: Record sources (CSV provided, trait for others)
//! - `reports`: The aggregation reports
//! - `display`: Terminal row formatting
//! - `chart`: Series types and the renderer boundary
//! - `monitor`: Facade tying the record set to reports and charts
//!
//! # Example
//!
//! ```rust
//! use finmon::config::Settings;
//! use finmon::models::{AccountRecord, Money, RecordQuery};
//! use finmon::monitor::Monitor;
//! use chrono::NaiveDate;
//!
//! let record = AccountRecord::new(
//!     "alice",
//!     NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
//!     Money::from_cents(1050),
//! );
//! let monitor = Monitor::from_records(vec![record], Settings::default());
//! let total = monitor.total(&RecordQuery::new());
//! assert_eq!(total, 10.5);
//! ```

pub mod chart;
pub mod config;
pub mod display;
pub mod error;
pub mod import;
pub mod models;
pub mod monitor;
pub mod reports;
pub mod services;

pub use error::{Error, Result};
pub use monitor::Monitor;

//! Reports module for finmon
//!
//! Provides the aggregation reports: label usage counts, monthly bucketed
//! sums, cumulative running sums, and per-record point series.

pub mod label_usage;
pub mod monthly_sums;
pub mod point_series;
pub mod running_sum;

pub use label_usage::{LabelCount, LabelUsageReport};
pub use monthly_sums::MonthlySumReport;
pub use point_series::{PointSeriesReport, RecordPoint};
pub use running_sum::RunningSumReport;

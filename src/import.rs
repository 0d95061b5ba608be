//! Record import
//!
//! Sources of account records sit behind the `RecordSource` trait; the rest
//! of the library only sees typed records. A CSV-backed source is provided
//! as the default implementation.
//!
//! Import is lenient at the row level: a malformed row is skipped and
//! reported as a warning, never a hard failure.

use std::path::PathBuf;

use chrono::NaiveDate;
use csv::StringRecord;

use crate::error::{Error, Result};
use crate::models::{AccountRecord, Money};

/// Outcome of loading one source
#[derive(Debug, Clone, Default)]
pub struct SourceImport {
    /// Successfully parsed records
    pub records: Vec<AccountRecord>,
    /// One message per skipped row
    pub warnings: Vec<String>,
}

/// A provider of account records
pub trait RecordSource {
    /// Human-readable name of the source, used in warnings
    fn name(&self) -> String;

    /// Load all records from the source
    fn load(&self) -> Result<SourceImport>;
}

/// CSV-backed record source
///
/// Expects the header `date,value,receiver,purpose,comment,labels`, with
/// labels separated by `;`. Every record from one source belongs to one
/// spender.
#[derive(Debug, Clone)]
pub struct CsvRecordSource {
    /// Spender assigned to every imported record
    pub spender: String,
    /// CSV file location
    pub path: PathBuf,
    /// strftime format for the date column
    pub date_format: String,
}

impl CsvRecordSource {
    /// Create a source reading `path` for the given spender
    pub fn new(spender: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            spender: spender.into(),
            path: path.into(),
            date_format: "%Y-%m-%d".to_string(),
        }
    }

    /// Override the date format
    pub fn with_date_format(mut self, format: &str) -> Self {
        self.date_format = format.to_string();
        self
    }

    /// Parse a single CSV row
    fn parse_row(&self, row: &StringRecord) -> std::result::Result<AccountRecord, String> {
        let date_str = row
            .get(0)
            .ok_or_else(|| "Missing date column".to_string())?
            .trim();
        let date = NaiveDate::parse_from_str(date_str, &self.date_format)
            .map_err(|_| format!("Could not parse date: '{}'", date_str))?;

        let value_str = row
            .get(1)
            .ok_or_else(|| "Missing value column".to_string())?
            .trim();
        let value = Money::parse(value_str).map_err(|e| e.to_string())?;

        let field = |idx: usize| row.get(idx).map(|s| s.trim().to_string()).unwrap_or_default();

        let mut record = AccountRecord::new(self.spender.clone(), date, value);
        record.receiver = field(2);
        record.purpose = field(3);
        record.comment = field(4);
        record.labels = field(5)
            .split(';')
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect();

        Ok(record)
    }
}

impl RecordSource for CsvRecordSource {
    fn name(&self) -> String {
        format!("{} ({})", self.spender, self.path.display())
    }

    fn load(&self) -> Result<SourceImport> {
        let mut reader = csv::Reader::from_path(&self.path)
            .map_err(|e| Error::Import(format!("Failed to open {}: {}", self.path.display(), e)))?;

        let mut import = SourceImport::default();

        for (idx, result) in reader.records().enumerate() {
            // Row numbers are 1-based and count the header
            let row_number = idx + 2;
            let row = match result {
                Ok(row) => row,
                Err(e) => {
                    import
                        .warnings
                        .push(format!("Row {}: error reading CSV record: {}", row_number, e));
                    continue;
                }
            };

            match self.parse_row(&row) {
                Ok(record) => import.records.push(record),
                Err(msg) => import.warnings.push(format!("Row {}: {}", row_number, msg)),
            }
        }

        Ok(import)
    }
}

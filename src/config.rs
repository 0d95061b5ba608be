//! Library settings
//!
//! Manages presentation preferences such as display truncation, date
//! formatting, and chart dimensions. Settings persist as a JSON file at a
//! caller-supplied path.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// User settings for finmon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Maximum length of free-text fields in display rows
    #[serde(default = "default_truncate_length")]
    pub truncate_length: usize,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Chart width in pixels
    #[serde(default = "default_chart_width")]
    pub chart_width: u32,

    /// Chart height in pixels
    #[serde(default = "default_chart_height")]
    pub chart_height: u32,
}

fn default_truncate_length() -> usize {
    60
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_chart_width() -> u32 {
    1600
}

fn default_chart_height() -> u32 {
    900
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            truncate_length: default_truncate_length(),
            date_format: default_date_format(),
            chart_width: default_chart_width(),
            chart_height: default_chart_height(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if the file
    /// doesn't exist
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)
                .map_err(|e| Error::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| Error::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Io(format!("Failed to create config directory: {}", e)))?;
        }

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(path, contents)
            .map_err(|e| Error::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

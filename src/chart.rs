//! Chart rendering boundary
//!
//! The library computes chart series but never draws them. Rendering is
//! delegated to a `ChartRenderer` implementation supplied by the caller,
//! which receives positional series data plus sizing options.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::error::Result;

/// Chart sizing options handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartOptions {
    /// Chart width in pixels
    pub width: u32,
    /// Chart height in pixels
    pub height: u32,
}

impl ChartOptions {
    /// Build options from settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            width: settings.chart_width,
            height: settings.chart_height,
        }
    }
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

/// One bar series of a stacked bar chart
///
/// `offsets[i]` is the stacking baseline under `values[i]`, accumulated
/// from the series drawn before this one.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    /// Series name shown in the legend
    pub label: String,
    /// Bucket labels along the x axis
    pub buckets: Vec<String>,
    /// Bar heights in major units
    pub values: Vec<f64>,
    /// Stacking baselines, parallel to `values`
    pub offsets: Vec<f64>,
}

/// One step series of a cumulative chart
#[derive(Debug, Clone, PartialEq)]
pub struct StepSeries {
    /// Series name shown in the legend
    pub label: String,
    /// Point dates along the x axis
    pub dates: Vec<NaiveDate>,
    /// Cumulative values in major units
    pub values: Vec<f64>,
}

/// One marker series of a per-record chart
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSeries {
    /// Series name shown in the legend
    pub label: String,
    /// Point dates along the x axis
    pub dates: Vec<NaiveDate>,
    /// Point values in major units
    pub values: Vec<f64>,
    /// Per-point annotations, parallel to `values`
    pub point_labels: Vec<String>,
}

/// Renderer for chart series
///
/// Implementations draw the given series to `path`. The library only
/// computes the data; an implementation may target any backend.
pub trait ChartRenderer {
    /// Render stacked bar series
    fn render_bars(&mut self, series: &[BarSeries], options: ChartOptions, path: &Path)
        -> Result<()>;

    /// Render step series
    fn render_steps(
        &mut self,
        series: &[StepSeries],
        options: ChartOptions,
        path: &Path,
    ) -> Result<()>;

    /// Render marker series with per-point annotations
    fn render_markers(
        &mut self,
        series: &[MarkerSeries],
        options: ChartOptions,
        path: &Path,
    ) -> Result<()>;
}

/// Recording renderer for tests and dry runs: stores what it was asked to
/// draw and touches no files
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    /// Bar series captured per render call
    pub bar_calls: Vec<(Vec<BarSeries>, ChartOptions, PathBuf)>,
    /// Step series captured per render call
    pub step_calls: Vec<(Vec<StepSeries>, ChartOptions, PathBuf)>,
    /// Marker series captured per render call
    pub marker_calls: Vec<(Vec<MarkerSeries>, ChartOptions, PathBuf)>,
}

impl RecordingRenderer {
    /// Create an empty recording renderer
    pub fn new() -> Self {
        Self::default()
    }
}

impl ChartRenderer for RecordingRenderer {
    fn render_bars(
        &mut self,
        series: &[BarSeries],
        options: ChartOptions,
        path: &Path,
    ) -> Result<()> {
        self.bar_calls
            .push((series.to_vec(), options, path.to_path_buf()));
        Ok(())
    }

    fn render_steps(
        &mut self,
        series: &[StepSeries],
        options: ChartOptions,
        path: &Path,
    ) -> Result<()> {
        self.step_calls
            .push((series.to_vec(), options, path.to_path_buf()));
        Ok(())
    }

    fn render_markers(
        &mut self,
        series: &[MarkerSeries],
        options: ChartOptions,
        path: &Path,
    ) -> Result<()> {
        self.marker_calls
            .push((series.to_vec(), options, path.to_path_buf()));
        Ok(())
    }
}

//! Monitor facade
//!
//! Owns the imported record set and exposes the reporting surface: totals,
//! the aggregation reports, display rows, and multi-series chart assembly.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::chart::{BarSeries, ChartOptions, ChartRenderer, MarkerSeries, StepSeries};
use crate::config::Settings;
use crate::display::RecordRow;
use crate::error::Result;
use crate::import::RecordSource;
use crate::models::{AccountRecord, Money, RecordQuery};
use crate::reports::{LabelUsageReport, MonthlySumReport, PointSeriesReport, RunningSumReport};
use crate::services::{sort_records, RecordFilter, SortField};

/// Facade over the imported record set
#[derive(Debug, Clone)]
pub struct Monitor {
    records: Vec<AccountRecord>,
    settings: Settings,
}

impl Monitor {
    /// Build a monitor from already-typed records
    ///
    /// Records are sorted by date (stable) so cumulative series advance
    /// monotonically along the x axis.
    pub fn from_records(mut records: Vec<AccountRecord>, settings: Settings) -> Self {
        records.sort_by_key(|r| r.date);
        Self { records, settings }
    }

    /// Load records from all sources
    ///
    /// A failing source is logged and skipped; the monitor proceeds with
    /// whatever imported cleanly.
    pub fn load(sources: &[Box<dyn RecordSource>], settings: Settings) -> Self {
        let mut records = Vec::new();

        for source in sources {
            match source.load() {
                Ok(import) => {
                    if let Some(first) = import.warnings.first() {
                        warn!(
                            source = %source.name(),
                            skipped = import.warnings.len(),
                            "rows skipped during import: {}",
                            first
                        );
                    }
                    records.extend(import.records);
                }
                Err(e) => {
                    warn!(source = %source.name(), "failed to load record source: {}", e);
                }
            }
        }

        Self::from_records(records, settings)
    }

    /// All records held by the monitor, date-sorted
    pub fn records(&self) -> &[AccountRecord] {
        &self.records
    }

    /// Settings in effect for display and charts
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Signed total over the selected records, in major units
    pub fn total(&self, query: &RecordQuery) -> f64 {
        let filter = RecordFilter::from_query(query);
        let total: Money = filter
            .apply(&self.records)
            .into_iter()
            .map(|r| r.signed_value(query.invert))
            .sum();
        total.to_major_units()
    }

    /// Label usage counts for the selected records
    pub fn label_usage(&self, query: &RecordQuery) -> LabelUsageReport {
        LabelUsageReport::generate(&self.records, query)
    }

    /// Monthly bucketed sums for the selected records
    pub fn monthly_sums(&self, query: &RecordQuery) -> Result<MonthlySumReport> {
        MonthlySumReport::generate(&self.records, query)
    }

    /// Cumulative running sum for the selected records
    pub fn running_sum(&self, query: &RecordQuery) -> RunningSumReport {
        RunningSumReport::generate(&self.records, query)
    }

    /// Per-record point series for the selected records
    pub fn point_series(&self, query: &RecordQuery) -> PointSeriesReport {
        PointSeriesReport::generate(&self.records, query)
    }

    /// Display rows for the selected records, optionally sorted
    pub fn record_rows(
        &self,
        query: &RecordQuery,
        sort: Option<SortField>,
        reverse: bool,
    ) -> Vec<RecordRow> {
        let filter = RecordFilter::from_query(query);
        let mut selected = filter.apply(&self.records);
        sort_records(&mut selected, sort, reverse);

        selected
            .into_iter()
            .map(|r| RecordRow::from_record(r, &self.settings, query.invert))
            .collect()
    }

    /// Render one stacked bar chart with one series per query
    ///
    /// Stacking baselines accumulate per bucket across the queries, in
    /// order, so later series sit on top of earlier ones. The offsets map
    /// lives only for this call.
    pub fn render_monthly_sums(
        &self,
        queries: &[RecordQuery],
        renderer: &mut dyn ChartRenderer,
        path: &Path,
    ) -> Result<PathBuf> {
        let mut offsets: HashMap<String, f64> = HashMap::new();
        let mut series = Vec::with_capacity(queries.len());

        for (idx, query) in queries.iter().enumerate() {
            let report = self.monthly_sums(query)?;
            let baseline = stack_baseline(&offsets, &report.buckets);
            advance_offsets(&mut offsets, &report.buckets, &report.sums);

            series.push(BarSeries {
                label: series_label(query, idx),
                buckets: report.buckets,
                values: report.sums,
                offsets: baseline,
            });
        }

        renderer.render_bars(&series, self.chart_options(), path)?;
        Ok(path.to_path_buf())
    }

    /// Render one step chart with one cumulative series per query
    pub fn render_running_sums(
        &self,
        queries: &[RecordQuery],
        renderer: &mut dyn ChartRenderer,
        path: &Path,
    ) -> Result<PathBuf> {
        let series: Vec<StepSeries> = queries
            .iter()
            .enumerate()
            .map(|(idx, query)| {
                let report = self.running_sum(query);
                StepSeries {
                    label: series_label(query, idx),
                    dates: report.dates,
                    values: report.values,
                }
            })
            .collect();

        renderer.render_steps(&series, self.chart_options(), path)?;
        Ok(path.to_path_buf())
    }

    /// Render one marker chart with one annotated series per query
    pub fn render_point_series(
        &self,
        queries: &[RecordQuery],
        renderer: &mut dyn ChartRenderer,
        path: &Path,
    ) -> Result<PathBuf> {
        let series: Vec<MarkerSeries> = queries
            .iter()
            .enumerate()
            .map(|(idx, query)| {
                let report = self.point_series(query);
                let mut dates = Vec::with_capacity(report.points.len());
                let mut values = Vec::with_capacity(report.points.len());
                let mut point_labels = Vec::with_capacity(report.points.len());
                for point in report.points {
                    dates.push(point.date);
                    values.push(point.value);
                    point_labels.push(point.label);
                }
                MarkerSeries {
                    label: series_label(query, idx),
                    dates,
                    values,
                    point_labels,
                }
            })
            .collect();

        renderer.render_markers(&series, self.chart_options(), path)?;
        Ok(path.to_path_buf())
    }

    fn chart_options(&self) -> ChartOptions {
        ChartOptions::from_settings(&self.settings)
    }
}

/// Series label: the query's plot label, or its position in the query list
fn series_label(query: &RecordQuery, idx: usize) -> String {
    query
        .plot_label
        .clone()
        .unwrap_or_else(|| idx.to_string())
}

/// Baseline under each bucket, read from the accumulated offsets
fn stack_baseline(offsets: &HashMap<String, f64>, buckets: &[String]) -> Vec<f64> {
    buckets
        .iter()
        .map(|b| offsets.get(b).copied().unwrap_or(0.0))
        .collect()
}

/// Advance the per-bucket offsets by one series' values
fn advance_offsets(offsets: &mut HashMap<String, f64>, buckets: &[String], values: &[f64]) {
    for (bucket, value) in buckets.iter().zip(values) {
        *offsets.entry(bucket.clone()).or_insert(0.0) += value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::RecordingRenderer;
    use crate::import::CsvRecordSource;
    use chrono::NaiveDate;
    use std::io::Write;

    fn record(date: (i32, u32, u32), cents: i64, labels: &[&str]) -> AccountRecord {
        let mut r = AccountRecord::new(
            "alice",
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            Money::from_cents(cents),
        );
        r.labels = labels.iter().map(|l| l.to_string()).collect();
        r
    }

    fn monitor() -> Monitor {
        Monitor::from_records(
            vec![
                record((2024, 2, 5), 500, &["food"]),
                record((2024, 1, 10), 1000, &["food"]),
                record((2024, 1, 15), 2000, &["rent"]),
                record((2024, 2, 20), 1500, &["rent"]),
            ],
            Settings::default(),
        )
    }

    fn query(label: &str) -> RecordQuery {
        RecordQuery::new()
            .with_labels(vec![label.to_string()])
            .after(NaiveDate::from_ymd_opt(2023, 12, 31).unwrap())
            .before(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
    }

    #[test]
    fn test_from_records_sorts_by_date() {
        let m = monitor();
        let dates: Vec<NaiveDate> = m.records().iter().map(|r| r.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
    }

    #[test]
    fn test_total() {
        let m = monitor();
        assert_eq!(m.total(&query("food")), 15.0);
        assert_eq!(m.total(&query("food").inverted()), -15.0);
        assert_eq!(m.total(&query("nothing")), 0.0);
    }

    #[test]
    fn test_running_sum_is_monotonic_in_x() {
        let m = monitor();
        let report = m.running_sum(&query("food"));
        assert_eq!(report.values, vec![10.0, 15.0]);
    }

    #[test]
    fn test_record_rows_sorted() {
        let m = monitor();
        let rows = m.record_rows(&query("food"), Some(SortField::Value), true);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].value, 10.0);
        assert_eq!(rows[1].value, 5.0);
    }

    #[test]
    fn test_render_monthly_sums_stacks_offsets() {
        let m = monitor();
        let mut renderer = RecordingRenderer::new();

        let path = m
            .render_monthly_sums(
                &[query("food"), query("rent")],
                &mut renderer,
                Path::new("out.png"),
            )
            .unwrap();
        assert_eq!(path, PathBuf::from("out.png"));

        let (series, options, _) = &renderer.bar_calls[0];
        assert_eq!(options.width, 1600);
        assert_eq!(series.len(), 2);

        // First series sits on the ground
        assert_eq!(series[0].buckets, vec!["2024-01", "2024-02"]);
        assert_eq!(series[0].offsets, vec![0.0, 0.0]);

        // Second series is lifted by the first one's values per bucket
        assert_eq!(series[1].buckets, vec!["2024-01", "2024-02"]);
        assert_eq!(series[1].values, vec![20.0, 15.0]);
        assert_eq!(series[1].offsets, vec![10.0, 5.0]);
    }

    #[test]
    fn test_render_running_sums_one_series_per_query() {
        let m = monitor();
        let mut renderer = RecordingRenderer::new();

        m.render_running_sums(
            &[query("food").with_plot_label("Food"), query("rent")],
            &mut renderer,
            Path::new("steps.png"),
        )
        .unwrap();

        let (series, _, _) = &renderer.step_calls[0];
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].label, "Food");
        // Unlabelled query falls back to its index
        assert_eq!(series[1].label, "1");
    }

    #[test]
    fn test_render_point_series_carries_labels() {
        let mut r = record((2024, 1, 10), 1000, &["food"]);
        r.purpose = "market".to_string();
        let m = Monitor::from_records(vec![r], Settings::default());

        let mut renderer = RecordingRenderer::new();
        m.render_point_series(&[query("food")], &mut renderer, Path::new("points.png"))
            .unwrap();

        let (series, _, _) = &renderer.marker_calls[0];
        assert_eq!(series[0].point_labels, vec!["market"]);
        assert_eq!(series[0].values, vec![10.0]);
    }

    #[test]
    fn test_load_proceeds_past_failing_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "date,value,receiver,purpose,comment,labels\n\
             2024-01-10,10.00,Store,,,food\n"
        )
        .unwrap();
        file.flush().unwrap();

        let sources: Vec<Box<dyn RecordSource>> = vec![
            Box::new(CsvRecordSource::new("bob", "/nonexistent/records.csv")),
            Box::new(CsvRecordSource::new("alice", file.path())),
        ];

        let m = Monitor::load(&sources, Settings::default());
        assert_eq!(m.records().len(), 1);
        assert_eq!(m.records()[0].spender, "alice");
    }
}

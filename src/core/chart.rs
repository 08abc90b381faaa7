use crate::domain::model::{Group, Record};
use crate::utils::error::{PlotError, Result};
use serde::Serialize;
use std::ops::Range;

pub const X_LABEL: &str = "n_jobs";

/// The four charts produced per run, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    RuntimeMeanMs,
    MakespanBest,
    MakespanMean,
    MakespanStd,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::RuntimeMeanMs,
        Metric::MakespanBest,
        Metric::MakespanMean,
        Metric::MakespanStd,
    ];

    /// File stem of the chart, also the CSV column it plots.
    pub fn key(self) -> &'static str {
        match self {
            Metric::RuntimeMeanMs => "runtime_mean_ms",
            Metric::MakespanBest => "makespan_best",
            Metric::MakespanMean => "makespan_mean",
            Metric::MakespanStd => "makespan_std",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Metric::RuntimeMeanMs => "Runtime vs jobs (mean ± std)",
            Metric::MakespanBest => "Makespan best vs jobs",
            Metric::MakespanMean => "Makespan mean vs jobs",
            Metric::MakespanStd => "Makespan std vs jobs",
        }
    }

    pub fn y_label(self) -> &'static str {
        match self {
            Metric::RuntimeMeanMs => "runtime mean (ms)",
            Metric::MakespanBest => "makespan best",
            Metric::MakespanMean => "makespan mean",
            Metric::MakespanStd => "makespan std",
        }
    }

    pub fn value(self, record: &Record) -> f64 {
        match self {
            Metric::RuntimeMeanMs => record.time_mean_ms,
            Metric::MakespanBest => record.makespan_best as f64,
            Metric::MakespanMean => record.makespan_mean,
            Metric::MakespanStd => record.makespan_std,
        }
    }

    /// Half-length of the error bar drawn around `value`, if the metric has one.
    pub fn error(self, record: &Record) -> Option<f64> {
        match self {
            Metric::RuntimeMeanMs => Some(record.time_std_ms),
            _ => None,
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.png", self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub err: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub label: String,
    pub points: Vec<Point>,
}

/// Everything a chart shows, computed before any pixel is drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub metric: Metric,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
}

impl ChartSpec {
    /// One series per algorithm, in ascending name order; points follow the
    /// group's `(jobs, machines)` order.
    pub fn build(group: &Group, metric: Metric) -> Self {
        Self::with_labels(group, metric, metric.title(), metric.y_label())
    }

    pub fn with_labels(group: &Group, metric: Metric, title: &str, y_label: &str) -> Self {
        let series = group
            .iter()
            .map(|(algo, rows)| Series {
                label: algo.to_string(),
                points: rows
                    .iter()
                    .map(|r| Point {
                        x: r.jobs as f64,
                        y: metric.value(r),
                        err: metric.error(r),
                    })
                    .collect(),
            })
            .collect();

        Self {
            metric,
            title: title.to_string(),
            x_label: X_LABEL.to_string(),
            y_label: y_label.to_string(),
            series,
        }
    }

    pub fn has_error_bars(&self) -> bool {
        self.series
            .iter()
            .flat_map(|s| s.points.iter())
            .any(|p| p.err.is_some())
    }

    /// Axis ranges covering every point and error bar, with a 5% margin.
    /// A chart without points gets unit ranges. Fails when the data does
    /// not fit in finite `f64` ranges.
    pub fn bounds(&self) -> Result<(Range<f64>, Range<f64>)> {
        let points = || self.series.iter().flat_map(|s| s.points.iter());

        if points().next().is_none() {
            return Ok((0.0..1.0, 0.0..1.0));
        }

        let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
        for p in points() {
            let err = p.err.unwrap_or(0.0);
            x_min = x_min.min(p.x);
            x_max = x_max.max(p.x);
            y_min = y_min.min(p.y - err);
            y_max = y_max.max(p.y + err);
        }

        let x_range = pad(x_min, x_max);
        let y_range = pad(y_min, y_max);
        for (axis, range) in [("x", &x_range), ("y", &y_range)] {
            if !(range.start.is_finite() && range.end.is_finite()) {
                return Err(PlotError::RenderError {
                    message: format!(
                        "'{}': {} axis range {}..{} is not finite",
                        self.title, axis, range.start, range.end
                    ),
                });
            }
        }

        Ok((x_range, y_range))
    }
}

fn pad(min: f64, max: f64) -> Range<f64> {
    let span = max - min;
    if span <= f64::EPSILON * max.abs().max(1.0) {
        let delta = (max.abs() * 0.05).max(1.0);
        return (min - delta)..(max + delta);
    }
    let margin = span * 0.05;
    (min - margin)..(max + margin)
}

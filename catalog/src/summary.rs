//! Dashboard summary values: metric cards and chart series.

use std::fmt;

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    Count(i64),
    /// Fractional value printed with a fixed number of decimals.
    Fixed { value: f64, decimals: usize },
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::Fixed { value, decimals } => write!(f, "{value:.decimals$}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Metric {
    pub label: &'static str,
    pub value: MetricValue,
}

impl Metric {
    #[must_use]
    pub fn count(label: &'static str, n: usize) -> Self {
        Self { label, value: MetricValue::Count(i64::try_from(n).unwrap_or(i64::MAX)) }
    }

    #[must_use]
    pub fn total(label: &'static str, n: i64) -> Self {
        Self { label, value: MetricValue::Count(n) }
    }

    #[must_use]
    pub fn fixed(label: &'static str, value: f64, decimals: usize) -> Self {
        Self { label, value: MetricValue::Fixed { value, decimals } }
    }
}

/// One x-axis entry; `values` line up with [`Chart::series`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Point {
    pub label: String,
    pub values: Vec<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Chart {
    pub title: &'static str,
    pub series: Vec<&'static str>,
    pub points: Vec<Point>,
}

impl Chart {
    /// Single-series chart of counts per label.
    #[must_use]
    pub fn counts(title: &'static str, series: &'static str, tally: Vec<(String, usize)>) -> Self {
        let points = tally.into_iter().map(|(label, n)| Point { label, values: vec![as_f64(n)] }).collect();
        Self { title, series: vec![series], points }
    }

    /// Single-series chart of pre-computed values.
    #[must_use]
    pub fn values(title: &'static str, series: &'static str, values: Vec<(String, f64)>) -> Self {
        let points = values.into_iter().map(|(label, v)| Point { label, values: vec![v] }).collect();
        Self { title, series: vec![series], points }
    }

    /// First-series value for `label`, if present.
    #[must_use]
    pub fn value_of(&self, label: &str) -> Option<f64> {
        self.points.iter().find(|p| p.label == label).and_then(|p| p.values.first().copied())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Summary {
    pub metrics: Vec<Metric>,
    pub charts: Vec<Chart>,
}

impl Summary {
    #[must_use]
    pub fn metric(&self, label: &str) -> Option<&MetricValue> {
        self.metrics.iter().find(|m| m.label == label).map(|m| &m.value)
    }

    #[must_use]
    pub fn chart(&self, title: &str) -> Option<&Chart> {
        self.charts.iter().find(|c| c.title == title)
    }
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn as_f64(n: usize) -> f64 {
    n as f64
}

//! Plain-text bar charts.

use crate::format::format_amount;
use serde::Serialize;
use std::fmt;

/// One bar: a period label and its value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarPoint {
    /// Period label (e.g. `TTM`, `2024`).
    pub period: String,
    /// Metric value for the period.
    pub value: f64,
}

/// A metric's values keyed by period, in statement row order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSeries {
    /// Metric name, exactly as in the statement.
    pub metric: String,
    /// One point per period.
    pub points: Vec<BarPoint>,
}

impl MetricSeries {
    /// Build a series from `(period, value)` pairs.
    pub fn new<'a>(metric: impl Into<String>, points: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        Self {
            metric: metric.into(),
            points: points
                .into_iter()
                .map(|(period, value)| BarPoint {
                    period: period.to_string(),
                    value,
                })
                .collect(),
        }
    }

    /// Chart this series with bars at most `width` characters long.
    pub fn to_chart(&self, width: usize) -> BarChart<'_> {
        BarChart {
            series: self,
            width,
        }
    }
}

/// Horizontal bar chart of one series.
///
/// Bar length is proportional to the absolute value; negative values are
/// drawn with a lighter glyph.
#[derive(Debug, Clone, Copy)]
pub struct BarChart<'a> {
    series: &'a MetricSeries,
    width: usize,
}

impl BarChart<'_> {
    const POSITIVE: char = '█';
    const NEGATIVE: char = '▒';

    fn bar_len(&self, value: f64, max_abs: f64) -> usize {
        if max_abs <= 0.0 || !value.is_finite() {
            return 0;
        }
        let len = (value.abs() / max_abs * self.width as f64).round() as usize;
        // keep non-zero values visible
        if len == 0 && value != 0.0 { 1 } else { len.min(self.width) }
    }

    /// Render the chart as text, one line per bar, titled by the metric name.
    pub fn render(&self) -> String {
        let points = &self.series.points;
        let max_abs = points
            .iter()
            .map(|p| p.value.abs())
            .filter(|v| v.is_finite())
            .fold(0.0_f64, f64::max);
        let label_width = points.iter().map(|p| p.period.len()).max().unwrap_or(0);

        let mut output = String::new();
        output.push_str(&self.series.metric);
        output.push('\n');
        for point in points {
            let glyph = if point.value < 0.0 {
                Self::NEGATIVE
            } else {
                Self::POSITIVE
            };
            let bar: String = std::iter::repeat_n(glyph, self.bar_len(point.value, max_abs)).collect();
            output.push_str(&format!(
                "  {:<label_width$} | {:<bar_width$} {}\n",
                point.period,
                bar,
                format_amount(point.value),
                bar_width = self.width
            ));
        }
        output
    }
}

impl fmt::Display for BarChart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

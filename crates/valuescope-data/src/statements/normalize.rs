//! Table normalization: metric rows × period columns into period rows × metric columns.
//!
//! [`normalize`] runs a fixed pipeline over a labelled text grid:
//!
//! 1. collapse the header to its innermost (period label) level
//! 2. transpose, so periods become rows
//! 3. promote the first transposed row (the metric names) to column labels
//! 4. replace `-` placeholders with `0`
//! 5. strip `%` signs
//! 6. parse every cell as `f64`
//! 7. check the period count and relabel periods with [`PERIOD_LABELS`]

use crate::error::{DataError, Result};
use crate::statements::table::RawTable;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Period labels assigned by row position, most recent first.
pub const PERIOD_LABELS: [&str; 6] = ["TTM", "2024", "2023", "2022", "2021", "2020"];

/// Name of the synthetic period column.
pub const PERIOD_COLUMN: &str = "Period";

/// Placeholder the source uses for missing values.
const PLACEHOLDER: &str = "-";

/// Labelled text grid used between pipeline steps.
#[derive(Debug, Clone, PartialEq)]
struct Grid {
    index: Vec<String>,
    columns: Vec<String>,
    cells: Vec<Vec<String>>,
}

impl Grid {
    /// Step 1: keep only the innermost header level as column labels.
    fn from_raw(raw: &RawTable) -> Result<Self> {
        let columns = raw
            .header
            .last()
            .cloned()
            .ok_or_else(|| DataError::Parse("table has no header".to_string()))?;

        if columns.len() < 2 {
            return Err(DataError::Parse(format!(
                "table has {} column(s), expected a metric column and at least one period",
                columns.len()
            )));
        }
        if let Some(row) = raw.rows.iter().find(|row| row.len() != columns.len()) {
            return Err(DataError::Parse(format!(
                "row '{}' has {} cells, header has {}",
                row.first().map(String::as_str).unwrap_or_default(),
                row.len(),
                columns.len()
            )));
        }

        Ok(Self {
            index: (0..raw.rows.len()).map(|i| i.to_string()).collect(),
            columns,
            cells: raw.rows.clone(),
        })
    }

    /// Step 2: swap rows and columns, carrying labels along.
    fn transpose(self) -> Self {
        let cells = (0..self.columns.len())
            .map(|c| self.cells.iter().map(|row| row[c].clone()).collect())
            .collect();
        Self {
            index: self.columns,
            columns: self.index,
            cells,
        }
    }

    /// Step 3: the first row becomes the column labels and leaves the data.
    fn promote_header(mut self) -> Result<Self> {
        if self.cells.is_empty() {
            return Err(DataError::Parse("table has no rows".to_string()));
        }
        let columns = self.cells.remove(0);
        self.index.remove(0);
        if columns.is_empty() {
            return Err(DataError::Parse("table has no metric rows".to_string()));
        }

        let mut seen = HashSet::with_capacity(columns.len());
        if let Some(dup) = columns.iter().find(|name| !seen.insert(name.as_str())) {
            return Err(DataError::DuplicateMetric(dup.clone()));
        }

        Ok(Self {
            index: self.index,
            columns,
            cells: self.cells,
        })
    }

    /// Steps 4 and 5.
    fn clean(mut self) -> Self {
        for cell in self.cells.iter_mut().flatten() {
            *cell = clean_cell(cell);
        }
        self
    }

    /// Step 6.
    fn coerce(self) -> Result<Vec<Vec<f64>>> {
        self.cells
            .iter()
            .zip(&self.index)
            .map(|(row, period)| {
                row.iter()
                    .zip(&self.columns)
                    .map(|(cell, metric)| {
                        parse_cell(cell).ok_or_else(|| DataError::NonNumeric {
                            metric: metric.clone(),
                            period: period.clone(),
                            value: cell.clone(),
                        })
                    })
                    .collect()
            })
            .collect()
    }
}

/// Replace the `-` placeholder with `0` and strip `%` signs.
///
/// Idempotent: cleaning an already cleaned cell returns it unchanged.
pub fn clean_cell(cell: &str) -> String {
    let cell = cell.trim();
    if cell == PLACEHOLDER {
        "0".to_string()
    } else {
        cell.replace('%', "")
    }
}

/// Parse a cleaned cell as a number, accepting `,` thousands separators.
pub fn parse_cell(cell: &str) -> Option<f64> {
    let digits: String = cell.trim().chars().filter(|&c| c != ',').collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Normalize a raw statement table.
///
/// # Errors
/// Returns a parse-class [`DataError`] when the table is malformed, a metric
/// name repeats, a cell is still non-numeric after cleanup, or the table does
/// not hold exactly [`PERIOD_LABELS`]`.len()` periods.
pub fn normalize(raw: &RawTable) -> Result<NormalizedStatement> {
    let grid = Grid::from_raw(raw)?
        .transpose()
        .promote_header()?
        .clean();

    let metrics = grid.columns.clone();
    let values = grid.coerce()?;

    if values.len() != PERIOD_LABELS.len() {
        return Err(DataError::PeriodCount {
            expected: PERIOD_LABELS.len(),
            found: values.len(),
        });
    }

    Ok(NormalizedStatement {
        periods: PERIOD_LABELS.iter().map(|p| (*p).to_string()).collect(),
        metrics,
        values,
    })
}

/// One statement as a period-by-metric numeric table.
///
/// Rows are periods ordered as [`PERIOD_LABELS`]; columns are metrics in
/// source order with unique names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedStatement {
    periods: Vec<String>,
    metrics: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl NormalizedStatement {
    /// Period labels, one per row.
    pub fn periods(&self) -> &[String] {
        &self.periods
    }

    /// Metric names, one per column.
    pub fn metrics(&self) -> &[String] {
        &self.metrics
    }

    /// Number of periods.
    pub fn height(&self) -> usize {
        self.periods.len()
    }

    /// Whether the statement has a metric column with this exact name.
    pub fn contains(&self, metric: &str) -> bool {
        self.metrics.iter().any(|m| m == metric)
    }

    /// Values of one metric, in period order.
    pub fn column(&self, metric: &str) -> Option<Vec<f64>> {
        let idx = self.metrics.iter().position(|m| m == metric)?;
        Some(self.values.iter().map(|row| row[idx]).collect())
    }

    /// `(period, value)` pairs of one metric, in period order.
    pub fn series(&self, metric: &str) -> Option<Vec<(&str, f64)>> {
        let column = self.column(metric)?;
        Some(
            self.periods
                .iter()
                .map(String::as_str)
                .zip(column)
                .collect(),
        )
    }

    /// A single value.
    pub fn value(&self, period: &str, metric: &str) -> Option<f64> {
        let row = self.periods.iter().position(|p| p == period)?;
        let col = self.metrics.iter().position(|m| m == metric)?;
        Some(self.values[row][col])
    }

    /// Convert to a Polars DataFrame with a leading `Period` column.
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let mut columns: Vec<Column> = Vec::with_capacity(self.metrics.len() + 1);
        columns.push(Series::new(PERIOD_COLUMN.into(), self.periods.clone()).into());
        for (idx, metric) in self.metrics.iter().enumerate() {
            let values: Vec<f64> = self.values.iter().map(|row| row[idx]).collect();
            columns.push(Series::new(metric.as_str().into(), values).into());
        }

        Ok(DataFrame::new(columns)?)
    }
}

//! CSV and JSON export of fetched statements.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use valuescope_data::{StatementKind, StatementSet};

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid format error.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values, one row per value.
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
        }
    }

    /// File name used when exporting a symbol's statements.
    pub fn file_name(&self, symbol: &str) -> String {
        format!("{}_financials.{}", symbol.to_uppercase(), self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "pretty-json" | "pretty" => Ok(Self::PrettyJson),
            other => Err(ExportError::InvalidFormat(other.to_string())),
        }
    }
}

/// One statement value in long format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatementRecord {
    /// Ticker symbol.
    pub symbol: String,
    /// Statement kind.
    pub statement: StatementKind,
    /// Period label.
    pub period: String,
    /// Metric name.
    pub metric: String,
    /// Value.
    pub value: f64,
}

impl StatementRecord {
    /// Flatten a statement set, statement by statement, period by period.
    pub fn from_set(set: &StatementSet) -> Vec<Self> {
        let mut records = Vec::new();
        for (kind, statement) in set.iter() {
            for period in statement.periods() {
                for metric in statement.metrics() {
                    if let Some(value) = statement.value(period, metric) {
                        records.push(Self {
                            symbol: set.symbol().to_string(),
                            statement: kind,
                            period: period.clone(),
                            metric: metric.clone(),
                            value,
                        });
                    }
                }
            }
        }
        records
    }
}

/// Trait for types that can be exported.
pub trait Exporter {
    /// Export data to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError>;

    /// Export data to a file in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    fn export_to_file(&self, path: &Path, format: ExportFormat) -> Result<(), ExportError> {
        let content = self.export_to_string(format)?;
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

fn records_to_csv(records: &[StatementRecord]) -> Result<String, ExportError> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    for record in records {
        wtr.serialize(record)?;
    }
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes).map_err(|e| ExportError::InvalidFormat(e.to_string()))
}

impl Exporter for StatementSet {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => records_to_csv(&StatementRecord::from_set(self)),
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

impl Exporter for Vec<StatementRecord> {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => records_to_csv(self),
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use valuescope_data::statements::{RawTable, normalize};

    fn set() -> StatementSet {
        let header = ["Fiscal Year", "TTM", "FY 2024", "FY 2023", "FY 2022", "FY 2021", "FY 2020"];
        let raw = RawTable::new(
            vec![header.iter().map(|h| (*h).to_string()).collect()],
            vec![
                ["Revenue", "60", "50", "40", "30", "20", "10"]
                    .iter()
                    .map(|c| (*c).to_string())
                    .collect(),
                ["Current Ratio", "1.5", "1.4", "1.3", "1.2", "1.1", "1"]
                    .iter()
                    .map(|c| (*c).to_string())
                    .collect(),
            ],
        );
        let mut set = StatementSet::new("AGP");
        set.insert(StatementKind::Ratios, normalize(&raw).unwrap());
        set
    }

    #[rstest]
    #[case("csv", ExportFormat::Csv)]
    #[case("JSON", ExportFormat::Json)]
    #[case("pretty-json", ExportFormat::PrettyJson)]
    fn test_parse_format(#[case] input: &str, #[case] expected: ExportFormat) {
        assert_eq!(input.parse::<ExportFormat>().unwrap(), expected);
    }

    #[test]
    fn test_parse_unknown_format() {
        assert!(matches!(
            "xlsx".parse::<ExportFormat>(),
            Err(ExportError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_file_name() {
        assert_eq!(ExportFormat::Csv.file_name("agp"), "AGP_financials.csv");
        assert_eq!(ExportFormat::PrettyJson.file_name("AGP"), "AGP_financials.json");
    }

    #[test]
    fn test_records_from_set() {
        let records = StatementRecord::from_set(&set());
        assert_eq!(records.len(), 12);
        assert_eq!(records[0].period, "TTM");
        assert_eq!(records[0].metric, "Revenue");
        assert_eq!(records[0].value, 60.0);
        assert_eq!(records[1].metric, "Current Ratio");
        assert_eq!(records[11].period, "2020");
    }

    #[test]
    fn test_csv_export() {
        let csv = set().export_to_string(ExportFormat::Csv).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("symbol,statement,period,metric,value"));
        assert_eq!(lines.next(), Some("AGP,ratios,TTM,Revenue,60.0"));
        assert_eq!(csv.lines().count(), 13);
    }

    #[test]
    fn test_json_export() {
        let json = set().export_to_string(ExportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["symbol"], "AGP");
        assert_eq!(value["statements"]["ratios"]["periods"][0], "TTM");
    }

    #[test]
    fn test_export_to_file() {
        let dir = std::env::temp_dir().join(format!("valuescope-export-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(ExportFormat::Csv.file_name("AGP"));

        set().export_to_file(&path, ExportFormat::Csv).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("symbol,statement"));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}

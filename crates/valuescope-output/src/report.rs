//! JSON reports of a ticker lookup.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use valuescope_data::{StatementFailure, StatementKind, StatementSet};
use valuescope_valuation::ValuationResult;

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A statement kind that could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureNote {
    /// Kind that failed.
    pub statement: StatementKind,
    /// Page that was requested.
    pub url: String,
    /// Error message.
    pub message: String,
}

impl From<&StatementFailure> for FailureNote {
    fn from(failure: &StatementFailure) -> Self {
        Self {
            statement: failure.kind,
            url: failure.url.clone(),
            message: failure.error.to_string(),
        }
    }
}

/// Statements, failures and an optional valuation for one symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Symbol being analyzed.
    pub symbol: String,

    /// Report generation timestamp.
    pub timestamp: DateTime<Utc>,

    /// Currency code amounts are quoted in.
    pub currency: String,

    /// Statements keyed by kind (JSON format).
    pub statements: serde_json::Value,

    /// Kinds that failed to load.
    pub failures: Vec<FailureNote>,

    /// Valuation, if one was computed (JSON format).
    pub valuation: Option<serde_json::Value>,
}

impl Report {
    /// Convert report to JSON string.
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the report as pretty JSON.
    pub fn write_to(&self, path: &Path) -> Result<(), ReportError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

/// Builder for creating reports.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    symbol: Option<String>,
    currency: Option<String>,
    statements: Option<serde_json::Value>,
    failures: Vec<FailureNote>,
    valuation: Option<serde_json::Value>,
}

impl ReportBuilder {
    /// Create a new report builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the currency code.
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Set the statements; the symbol is taken from the set.
    pub fn statements(mut self, set: &StatementSet) -> Result<Self, ReportError> {
        self.symbol = Some(set.symbol().to_string());
        let value = serde_json::to_value(set)?;
        self.statements = value.get("statements").cloned();
        Ok(self)
    }

    /// Add fetch failures.
    pub fn failures(mut self, failures: &[StatementFailure]) -> Self {
        self.failures.extend(failures.iter().map(FailureNote::from));
        self
    }

    /// Set the computed valuation.
    pub fn valuation(mut self, result: &ValuationResult) -> Result<Self, ReportError> {
        self.valuation = Some(serde_json::to_value(result)?);
        Ok(self)
    }

    /// Build the report.
    pub fn build(self) -> Report {
        Report {
            symbol: self.symbol.unwrap_or_default(),
            timestamp: Utc::now(),
            currency: self.currency.unwrap_or_else(|| "PKR".to_string()),
            statements: self
                .statements
                .unwrap_or_else(|| serde_json::Value::Object(serde_json::Map::new())),
            failures: self.failures,
            valuation: self.valuation,
        }
    }
}

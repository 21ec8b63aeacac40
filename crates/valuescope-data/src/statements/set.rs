//! Per-symbol collections of normalized statements.

use crate::error::{DataError, Result};
use crate::statements::kind::StatementKind;
use crate::statements::normalize::NormalizedStatement;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Normalized statements of one symbol, keyed by kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatementSet {
    symbol: String,
    statements: BTreeMap<StatementKind, NormalizedStatement>,
}

impl StatementSet {
    /// Create an empty set for a symbol.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            statements: BTreeMap::new(),
        }
    }

    /// Symbol the statements belong to.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Add or replace the statement of one kind.
    pub fn insert(&mut self, kind: StatementKind, statement: NormalizedStatement) {
        self.statements.insert(kind, statement);
    }

    /// Statement of one kind, if it was fetched successfully.
    pub fn get(&self, kind: StatementKind) -> Option<&NormalizedStatement> {
        self.statements.get(&kind)
    }

    /// Kinds present in the set, in [`StatementKind::all`] order.
    pub fn kinds(&self) -> Vec<StatementKind> {
        self.statements.keys().copied().collect()
    }

    /// Iterate over `(kind, statement)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (StatementKind, &NormalizedStatement)> {
        self.statements.iter().map(|(k, v)| (*k, v))
    }

    /// Number of statements present.
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Whether no statement is present.
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// A statement kind that could not be fetched or normalized.
#[derive(Debug)]
pub struct StatementFailure {
    /// Kind that failed.
    pub kind: StatementKind,
    /// Page that was requested.
    pub url: String,
    /// What went wrong.
    pub error: DataError,
}

impl fmt::Display for StatementFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error retrieving data from {}: {}", self.url, self.error)
    }
}

/// Outcome of fetching every statement kind of one symbol.
#[derive(Debug)]
pub struct StatementFetch {
    /// Statements that were fetched and normalized.
    pub set: StatementSet,
    /// Kinds that failed, in fetch order.
    pub failures: Vec<StatementFailure>,
}

impl StatementFetch {
    /// Start an empty fetch for a symbol.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            set: StatementSet::new(symbol),
            failures: Vec::new(),
        }
    }

    /// Record the result for one kind.
    pub fn record(&mut self, kind: StatementKind, url: String, result: Result<NormalizedStatement>) {
        match result {
            Ok(statement) => self.set.insert(kind, statement),
            Err(error) => self.failures.push(StatementFailure { kind, url, error }),
        }
    }

    /// Whether every kind was fetched successfully.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty() && self.set.len() == StatementKind::all().len()
    }

    /// Failure recorded for one kind, if any.
    pub fn failure(&self, kind: StatementKind) -> Option<&StatementFailure> {
        self.failures.iter().find(|f| f.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statements::normalize::normalize;
    use crate::statements::table::RawTable;

    fn statement() -> NormalizedStatement {
        let header = ["Year", "TTM", "FY24", "FY23", "FY22", "FY21", "FY20"]
            .map(String::from)
            .to_vec();
        let row = ["Revenue", "6", "5", "4", "3", "2", "1"].map(String::from).to_vec();
        normalize(&RawTable::new(vec![header], vec![row])).unwrap()
    }

    #[test]
    fn test_record_isolates_failures() {
        let mut fetch = StatementFetch::new("PSX");
        fetch.record(StatementKind::IncomeStatement, "u1".to_string(), Ok(statement()));
        fetch.record(
            StatementKind::CashFlow,
            "u3".to_string(),
            Err(DataError::Http {
                status: 500,
                url: "u3".to_string(),
            }),
        );
        fetch.record(StatementKind::Ratios, "u4".to_string(), Ok(statement()));

        assert_eq!(fetch.set.symbol(), "PSX");
        assert_eq!(
            fetch.set.kinds(),
            [StatementKind::IncomeStatement, StatementKind::Ratios]
        );
        assert!(fetch.failure(StatementKind::CashFlow).is_some());
        assert!(fetch.failure(StatementKind::Ratios).is_none());
        assert!(!fetch.is_complete());
    }

    #[test]
    fn test_failure_display() {
        let failure = StatementFailure {
            kind: StatementKind::Ratios,
            url: "https://example.com/ratios/".to_string(),
            error: DataError::NoTable("document has no <table> element".to_string()),
        };
        assert_eq!(
            failure.to_string(),
            "Error retrieving data from https://example.com/ratios/: \
             No table found: document has no <table> element"
        );
    }

    #[test]
    fn test_kinds_follow_fetch_order() {
        let mut set = StatementSet::new("AGP");
        set.insert(StatementKind::Ratios, statement());
        set.insert(StatementKind::IncomeStatement, statement());
        assert_eq!(
            set.kinds(),
            [StatementKind::IncomeStatement, StatementKind::Ratios]
        );
        assert_eq!(set.len(), 2);
    }
}

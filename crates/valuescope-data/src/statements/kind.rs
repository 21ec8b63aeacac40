//! Statement kinds and their page locations.

use crate::error::DataError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four statement pages published per symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementKind {
    /// Income statement
    IncomeStatement,
    /// Balance sheet
    BalanceSheet,
    /// Cash flow statement
    CashFlow,
    /// Financial ratios
    Ratios,
}

impl StatementKind {
    /// All kinds, in fetch order.
    pub const fn all() -> [Self; 4] {
        [
            Self::IncomeStatement,
            Self::BalanceSheet,
            Self::CashFlow,
            Self::Ratios,
        ]
    }

    /// Snake-case identifier (e.g. `income_statement`).
    pub const fn key(&self) -> &'static str {
        match self {
            Self::IncomeStatement => "income_statement",
            Self::BalanceSheet => "balance_sheet",
            Self::CashFlow => "cash_flow",
            Self::Ratios => "ratios",
        }
    }

    /// Human readable title (e.g. `Income Statement`).
    pub const fn title(&self) -> &'static str {
        match self {
            Self::IncomeStatement => "Income Statement",
            Self::BalanceSheet => "Balance Sheet",
            Self::CashFlow => "Cash Flow",
            Self::Ratios => "Ratios",
        }
    }

    /// Path segment appended after `/financials/`. Empty for the income statement.
    pub const fn url_suffix(&self) -> &'static str {
        match self {
            Self::IncomeStatement => "",
            Self::BalanceSheet => "balance-sheet/",
            Self::CashFlow => "cash-flow-statement/",
            Self::Ratios => "ratios/",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for StatementKind {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "income_statement" | "income" => Ok(Self::IncomeStatement),
            "balance_sheet" | "balance" => Ok(Self::BalanceSheet),
            "cash_flow" | "cash_flow_statement" | "cash" => Ok(Self::CashFlow),
            "ratios" => Ok(Self::Ratios),
            _ => Err(DataError::UnknownStatementKind(s.to_string())),
        }
    }
}

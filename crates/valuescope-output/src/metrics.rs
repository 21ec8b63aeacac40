//! Metrics charted for each statement kind.
//!
//! Only allowlisted metrics that are actually present in a statement are
//! charted, in allowlist order. Names must match the statement exactly.

use crate::chart::MetricSeries;
use valuescope_data::{NormalizedStatement, StatementKind};

const INCOME_STATEMENT: [&str; 6] = [
    "Revenue",
    "Revenue Growth (YoY) (%)",
    "Gross Margin (%)",
    "Operating Margin (%)",
    "Profit Margin (%)",
    "Interest Expense",
];

const BALANCE_SHEET: [&str; 5] = [
    "Cash & Equivalents",
    "Property, Plant & Equipment",
    "Long-Term Debt",
    "Retained Earnings",
    "Book Value Per Share",
];

const CASH_FLOW: [&str; 2] = ["Free Cash Flow", "Free Cash Flow Per Share"];

const RATIOS: [&str; 5] = [
    "Debt / Equity Ratio",
    "Current Ratio",
    "Return on Equity (ROE) (%)",
    "Return on Assets (ROA) (%)",
    "Return on Capital (ROIC) (%)",
];

/// Allowlisted chart metrics for a statement kind.
pub const fn chart_metrics(kind: StatementKind) -> &'static [&'static str] {
    match kind {
        StatementKind::IncomeStatement => &INCOME_STATEMENT,
        StatementKind::BalanceSheet => &BALANCE_SHEET,
        StatementKind::CashFlow => &CASH_FLOW,
        StatementKind::Ratios => &RATIOS,
    }
}

/// One series per allowlisted metric present in `statement`.
///
/// Missing metrics are skipped; each series keeps the statement's period
/// order.
pub fn chart_feed(kind: StatementKind, statement: &NormalizedStatement) -> Vec<MetricSeries> {
    chart_metrics(kind)
        .iter()
        .filter_map(|&metric| {
            statement
                .series(metric)
                .map(|points| MetricSeries::new(metric, points))
        })
        .collect()
}

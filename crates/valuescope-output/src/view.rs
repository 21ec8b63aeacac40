//! Text views of fetched statements.

use crate::metrics::chart_feed;
use valuescope_data::{NormalizedStatement, StatementFailure, StatementKind, StatementSet};

/// Rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    /// Longest bar, in characters.
    pub bar_width: usize,
    /// Print the statement's metric names above the charts.
    pub list_columns: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            bar_width: 40,
            list_columns: true,
        }
    }
}

/// Render one statement: a title, optionally its columns, then one bar
/// chart per allowlisted metric it contains.
pub fn render_statement(
    kind: StatementKind,
    statement: &NormalizedStatement,
    options: &ViewOptions,
) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", "=".repeat(80)));
    output.push_str(&format!("{}\n", kind.title()));
    output.push_str(&format!("{}\n", "=".repeat(80)));

    if options.list_columns {
        output.push_str(&format!(
            "Available columns in {}: {}\n",
            kind.key(),
            statement.metrics().join(", ")
        ));
    }

    let feed = chart_feed(kind, statement);
    if feed.is_empty() {
        output.push_str("No charted metrics in this statement.\n");
    }
    for series in &feed {
        output.push('\n');
        output.push_str(&series.to_chart(options.bar_width).render());
    }
    output
}

/// Render the selected kinds, in the order given.
///
/// Kinds missing from `set` get a one-line notice instead of a view.
pub fn render_selected(set: &StatementSet, selected: &[StatementKind], options: &ViewOptions) -> String {
    let mut output = String::new();
    for &kind in selected {
        match set.get(kind) {
            Some(statement) => output.push_str(&render_statement(kind, statement, options)),
            None => output.push_str(&format!("{}: no data for {}\n", kind.title(), set.symbol())),
        }
        output.push('\n');
    }
    output
}

/// One line per failed kind.
pub fn render_failures(failures: &[StatementFailure]) -> String {
    failures.iter().map(|f| format!("{f}\n")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use valuescope_data::DataError;
    use valuescope_data::statements::{RawTable, normalize};

    fn income() -> NormalizedStatement {
        let header = ["Fiscal Year", "TTM", "FY 2024", "FY 2023", "FY 2022", "FY 2021", "FY 2020"];
        let row = |cells: [&str; 7]| -> Vec<String> { cells.iter().map(|c| (*c).to_string()).collect() };
        normalize(&RawTable::new(
            vec![header.iter().map(|h| (*h).to_string()).collect()],
            vec![
                row(["Revenue", "1,200", "1,100", "1,000", "900", "800", "700"]),
                row(["Net Income", "120", "110", "100", "90", "80", "70"]),
                row(["Profit Margin (%)", "10%", "10%", "10%", "10%", "10%", "10%"]),
            ],
        ))
        .unwrap()
    }

    #[test]
    fn test_render_statement() {
        let text = render_statement(StatementKind::IncomeStatement, &income(), &ViewOptions::default());

        assert!(text.contains("Income Statement"));
        assert!(text.contains(
            "Available columns in income_statement: Revenue, Net Income, Profit Margin (%)"
        ));
        assert!(text.contains("\nRevenue\n"));
        assert!(text.contains("\nProfit Margin (%)\n"));
        assert!(!text.contains("\nNet Income\n"));
        assert!(text.contains("1,200.00"));
    }

    #[test]
    fn test_render_without_columns() {
        let options = ViewOptions {
            list_columns: false,
            ..ViewOptions::default()
        };
        let text = render_statement(StatementKind::IncomeStatement, &income(), &options);
        assert!(!text.contains("Available columns"));
    }

    #[test]
    fn test_render_selected_in_order() {
        let mut set = StatementSet::new("PSX");
        set.insert(StatementKind::IncomeStatement, income());

        let text = render_selected(
            &set,
            &[StatementKind::Ratios, StatementKind::IncomeStatement],
            &ViewOptions::default(),
        );
        let missing = text.find("Ratios: no data for PSX").unwrap();
        let shown = text.find("Income Statement").unwrap();
        assert!(missing < shown);
    }

    #[test]
    fn test_render_failures() {
        let failures = vec![StatementFailure {
            kind: StatementKind::Ratios,
            url: "https://example.test/PSX/financials/ratios/".to_string(),
            error: DataError::NoTable("no <table> element".to_string()),
        }];
        let text = render_failures(&failures);
        assert!(text.starts_with("Error retrieving data from https://example.test/PSX/financials/ratios/: "));
    }
}

//! Rendering and export of a parsed statement page.

use valuescope_data::statements::{RawTable, normalize};
use valuescope_data::{StatementKind, StatementSet};
use valuescope_output::{
    ExportFormat, Exporter, ReportBuilder, ViewOptions, chart_feed, render_selected,
};

const BALANCE_SHEET_PAGE: &str = r#"<html><body><table>
<thead>
  <tr><th>Fiscal Year</th><th>TTM</th><th>FY 2024</th><th>FY 2023</th><th>FY 2022</th><th>FY 2021</th><th>FY 2020</th></tr>
</thead>
<tbody>
  <tr><td>Cash & Equivalents</td><td>5,000</td><td>4,000</td><td>3,000</td><td>2,000</td><td>1,000</td><td>-</td></tr>
  <tr><td>Total Assets</td><td>9,000</td><td>8,000</td><td>7,000</td><td>6,000</td><td>5,000</td><td>4,000</td></tr>
  <tr><td>Long-Term Debt</td><td>-250</td><td>-</td><td>100</td><td>200</td><td>300</td><td>400</td></tr>
</tbody>
</table></body></html>"#;

fn balance_sheet_set() -> StatementSet {
    let raw = RawTable::from_html(BALANCE_SHEET_PAGE).unwrap();
    let mut set = StatementSet::new("AGP");
    set.insert(StatementKind::BalanceSheet, normalize(&raw).unwrap());
    set
}

#[test]
fn test_chart_feed_from_page() {
    let set = balance_sheet_set();
    let statement = set.get(StatementKind::BalanceSheet).unwrap();
    let feed = chart_feed(StatementKind::BalanceSheet, statement);

    let names: Vec<&str> = feed.iter().map(|s| s.metric.as_str()).collect();
    assert_eq!(names, ["Cash & Equivalents", "Long-Term Debt"]);
    assert_eq!(feed[0].points[5].value, 0.0);
    assert_eq!(feed[1].points[0].value, -250.0);
}

#[test]
fn test_render_balance_sheet() {
    let set = balance_sheet_set();
    let view = render_selected(&set, &[StatementKind::BalanceSheet], &ViewOptions::default());

    assert!(view.contains("Balance Sheet"));
    assert!(view.contains("Available columns in balance_sheet: Cash & Equivalents, Total Assets, Long-Term Debt"));
    assert!(view.contains("5,000.00"));
    assert!(view.contains("-250.00"));
}

#[test]
fn test_export_and_report() {
    let set = balance_sheet_set();

    let csv = set.export_to_string(ExportFormat::Csv).unwrap();
    assert_eq!(csv.lines().count(), 1 + 6 * 3);
    assert!(csv.contains("AGP,balance_sheet,2020,Cash & Equivalents,0.0"));

    let report = ReportBuilder::new().statements(&set).unwrap().build();
    assert_eq!(report.symbol, "AGP");
    assert_eq!(
        report.statements["balance_sheet"]["metrics"][2],
        "Long-Term Debt"
    );
}

//! End-to-end table normalization from HTML.

use rstest::rstest;
use valuescope_data::statements::{PERIOD_LABELS, clean_cell, normalize, parse_cell};
use valuescope_data::{DataError, RawTable};

fn page(header_rows: &[&[&str]], body_rows: &[&[&str]]) -> String {
    let row = |tag: &str, cells: &[&str]| {
        let cells: String = cells.iter().map(|c| format!("<{tag}>{c}</{tag}>")).collect();
        format!("<tr>{cells}</tr>")
    };
    let head: String = header_rows.iter().map(|r| row("th", *r)).collect();
    let body: String = body_rows.iter().map(|r| row("td", *r)).collect();
    format!("<table><thead>{head}</thead><tbody>{body}</tbody></table>")
}

const PERIODS: [&str; 7] = ["Fiscal Year", "TTM", "FY 2024", "FY 2023", "FY 2022", "FY 2021", "FY 2020"];

#[rstest]
#[case::single_header(&[&PERIODS[..]])]
#[case::two_level_header(&[&PERIODS[..], &["Period Ending", "a", "b", "c", "d", "e", "f"]])]
fn test_six_periods_get_fixed_labels(#[case] header: &[&[&str]]) {
    let html = page(
        header,
        &[
            &["Revenue", "10", "9", "8", "7", "6", "5"],
            &["EPS", "1.5", "-", "1.2", "1.1", "1.0", "0.9"],
        ],
    );

    let statement = normalize(&RawTable::from_html(&html).unwrap()).unwrap();

    assert_eq!(statement.periods(), PERIOD_LABELS);
    assert_eq!(statement.metrics(), ["Revenue", "EPS"]);
    assert_eq!(statement.column("EPS").unwrap(), [1.5, 0.0, 1.2, 1.1, 1.0, 0.9]);
}

#[test]
fn test_placeholder_and_percent_cells() {
    let html = page(
        &[&PERIODS[..]],
        &[&["ROE (%)", "-", "12.5%", "1,234.5", "-3%", "0%", "100"]],
    );

    let statement = normalize(&RawTable::from_html(&html).unwrap()).unwrap();

    assert_eq!(
        statement.column("ROE (%)").unwrap(),
        [0.0, 12.5, 1234.5, -3.0, 0.0, 100.0]
    );
}

#[test]
fn test_cleanup_is_idempotent() {
    for cell in ["-", "12.5%", "-12.5%", "1,000", "0", "42"] {
        let once = clean_cell(cell);
        let twice = clean_cell(&once);
        assert_eq!(parse_cell(&once), parse_cell(&twice), "cell {cell}");
    }
}

#[test]
fn test_five_period_table_is_rejected() {
    let html = page(
        &[&PERIODS[..6]],
        &[&["Revenue", "10", "9", "8", "7", "6"]],
    );

    let result = normalize(&RawTable::from_html(&html).unwrap());

    assert!(matches!(
        result,
        Err(DataError::PeriodCount {
            expected: 6,
            found: 5
        })
    ));
}

#[test]
fn test_residual_text_is_rejected() {
    let html = page(
        &[&PERIODS[..]],
        &[&["Revenue", "10", "9", "Upgrade", "7", "6", "5"]],
    );

    let err = normalize(&RawTable::from_html(&html).unwrap()).unwrap_err();
    assert!(err.is_parse_error());
}

#[test]
fn test_header_only_page_is_rejected() {
    let html = page(&[&PERIODS[..]], &[]);

    let err = normalize(&RawTable::from_html(&html).unwrap()).unwrap_err();
    assert!(err.is_parse_error());
    assert!(matches!(err, DataError::Parse(_)));
}

#[test]
fn test_page_with_only_captions_is_rejected() {
    let html = page(
        &[&PERIODS[..]],
        &[&["Upgrade to view the full statement"][..], &["Operating Expenses", "", ""]],
    );

    let raw = RawTable::from_html(&html).unwrap();
    assert!(raw.rows.is_empty());
    assert!(normalize(&raw).unwrap_err().is_parse_error());
}

#[test]
fn test_metric_row_missing_a_cell_is_rejected() {
    let html = page(
        &[&PERIODS[..]],
        &[
            &["Revenue", "10", "9", "8", "7", "6", "5"][..],
            &["Free Cash Flow", "4", "3", "2", "1", "0"],
        ],
    );

    let raw = RawTable::from_html(&html).unwrap();
    assert_eq!(raw.rows.len(), 2);

    let err = normalize(&raw).unwrap_err();
    assert!(err.is_parse_error());
    assert!(err.to_string().contains("Free Cash Flow"));
}

//! Raw HTML table extraction.

use crate::error::{DataError, Result};
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Unprocessed text grid of one HTML table.
///
/// `header` holds the header levels from outermost to innermost; each level
/// has one label per column. Every body row starts with the metric name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    /// Header levels, outermost first.
    pub header: Vec<Vec<String>>,
    /// Body rows: metric name followed by one cell per period. Rows are not
    /// width-checked here.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Create a table from already separated header levels and body rows.
    pub const fn new(header: Vec<Vec<String>>, rows: Vec<Vec<String>>) -> Self {
        Self { header, rows }
    }

    /// Number of columns, as given by the innermost header level.
    pub fn width(&self) -> usize {
        self.header.last().map_or(0, Vec::len)
    }

    /// Extract the first `<table>` of an HTML document.
    ///
    /// Header rows are the rows inside `<thead>`, or the leading rows made of
    /// `<th>` cells only when the table has no `<thead>`. Cells spanning
    /// several columns are repeated once per column. Section captions (rows
    /// carrying a single label and nothing else) are dropped; every other
    /// body row is kept as is, even when its width differs from the header.
    ///
    /// # Errors
    /// Returns `DataError::NoTable` if the document has no table or the table
    /// has no header row.
    pub fn from_html(html: &str) -> Result<Self> {
        let document = Html::parse_document(html);
        let table_selector = selector("table")?;
        let row_selector = selector("tr")?;

        let table = document
            .select(&table_selector)
            .next()
            .ok_or_else(|| DataError::NoTable("document has no <table> element".to_string()))?;

        let rows: Vec<ElementRef<'_>> = table.select(&row_selector).collect();
        let has_thead = rows.iter().any(|tr| in_thead(*tr));

        let mut header = Vec::new();
        let mut body = Vec::new();
        for tr in rows {
            let is_header = if has_thead {
                in_thead(tr)
            } else {
                body.is_empty() && only_header_cells(tr)
            };
            let cells = row_cells(tr);
            if cells.is_empty() {
                continue;
            }
            if is_header {
                header.push(cells);
            } else {
                body.push(cells);
            }
        }

        if header.is_empty() {
            return Err(DataError::NoTable("table has no header row".to_string()));
        }

        let mut raw = Self::new(header, Vec::with_capacity(body.len()));
        let width = raw.width();
        for cells in body {
            if is_caption(&cells) {
                debug!(
                    label = cells.first().map(String::as_str).unwrap_or_default(),
                    cells = cells.len(),
                    width,
                    "dropping grouping row"
                );
            } else {
                raw.rows.push(cells);
            }
        }

        Ok(raw)
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| DataError::Parse(format!("invalid selector {css}: {e}")))
}

fn in_thead(tr: ElementRef<'_>) -> bool {
    tr.parent()
        .and_then(ElementRef::wrap)
        .is_some_and(|parent| parent.value().name() == "thead")
}

fn cell_elements(tr: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    tr.children()
        .filter_map(ElementRef::wrap)
        .filter(|cell| matches!(cell.value().name(), "th" | "td"))
}

fn only_header_cells(tr: ElementRef<'_>) -> bool {
    let mut cells = cell_elements(tr).peekable();
    cells.peek().is_some() && cells.all(|cell| cell.value().name() == "th")
}

fn row_cells(tr: ElementRef<'_>) -> Vec<String> {
    let mut cells = Vec::new();
    for cell in cell_elements(tr) {
        let text = norm_text(&cell.text().collect::<String>());
        let span = cell
            .value()
            .attr("colspan")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(1);
        cells.extend(std::iter::repeat_n(text, span));
    }
    cells
}

/// A row with at most one distinct non-empty text, e.g. a caption cell
/// spanning the table.
fn is_caption(cells: &[String]) -> bool {
    let mut texts = cells.iter().filter(|c| !c.is_empty());
    match texts.next() {
        Some(first) => texts.all(|c| c == first),
        None => true,
    }
}

/// Collapse runs of whitespace and trim.
fn norm_text(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

//! Error types for statement fetching and normalization.

use thiserror::Error;

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while fetching or normalizing a statement.
#[derive(Debug, Error)]
pub enum DataError {
    /// Network error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("HTTP error: {status} from {url}")]
    Http {
        /// Status code returned by the server
        status: u16,
        /// Requested URL
        url: String,
    },

    /// The page contained no usable `<table>`
    #[error("No table found: {0}")]
    NoTable(String),

    /// Table shape error
    #[error("Data parsing error: {0}")]
    Parse(String),

    /// A cell that is still non-numeric after cleanup
    #[error("Non-numeric value {value:?} for '{metric}' in period '{period}'")]
    NonNumeric {
        /// Metric (column) name
        metric: String,
        /// Source period label
        period: String,
        /// Cell content after cleanup
        value: String,
    },

    /// The table does not carry the expected number of periods
    #[error("Expected {expected} periods, found {found}")]
    PeriodCount {
        /// Number of periods the label sequence covers
        expected: usize,
        /// Number of periods present in the table
        found: usize,
    },

    /// Two rows share a metric name
    #[error("Duplicate metric: {0}")]
    DuplicateMetric(String),

    /// Invalid symbol
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    /// Unknown statement kind name
    #[error("Unknown statement kind: {0}")]
    UnknownStatementKind(String),

    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),
}

impl DataError {
    /// Whether this error came from retrieving the page rather than reading it.
    pub const fn is_fetch_error(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Http { .. })
    }

    /// Whether this error came from extracting or normalizing the table.
    pub const fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::NoTable(_)
                | Self::Parse(_)
                | Self::NonNumeric { .. }
                | Self::PeriodCount { .. }
                | Self::DuplicateMetric(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let http = DataError::Http {
            status: 503,
            url: "https://example.com".to_string(),
        };
        assert!(http.is_fetch_error());
        assert!(!http.is_parse_error());

        let count = DataError::PeriodCount {
            expected: 6,
            found: 5,
        };
        assert!(count.is_parse_error());
        assert!(!count.is_fetch_error());

        assert!(!DataError::InvalidSymbol(String::new()).is_parse_error());
    }

    #[test]
    fn test_error_messages() {
        let err = DataError::NonNumeric {
            metric: "Revenue".to_string(),
            period: "TTM".to_string(),
            value: "Upgrade".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Non-numeric value \"Upgrade\" for 'Revenue' in period 'TTM'"
        );
    }
}

//! HTTP client for statement pages.

use crate::error::{DataError, Result};
use crate::statements::kind::StatementKind;
use crate::statements::normalize::{NormalizedStatement, normalize};
use crate::statements::set::StatementFetch;
use crate::statements::table::RawTable;
use tracing::{debug, warn};

/// Default quote page root.
pub const DEFAULT_BASE_URL: &str = "https://stockanalysis.com/quote";

/// Browser-like user agent; the quote pages reject unidentified clients.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Root URL the `/{SYMBOL}/financials/...` path is appended to.
    pub base_url: String,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: BROWSER_USER_AGENT.to_string(),
        }
    }
}

/// Fetches statement pages, one GET per statement kind.
///
/// Requests are made one at a time with no retry and the transport's default
/// timeout.
pub struct StatementClient {
    client: reqwest::Client,
    base_url: String,
}

impl StatementClient {
    /// Create a client with the default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with a custom configuration.
    ///
    /// # Example
    /// ```no_run
    /// use valuescope_data::statements::{ClientConfig, StatementClient};
    ///
    /// # fn example() -> valuescope_data::Result<()> {
    /// let client = StatementClient::with_config(ClientConfig {
    ///     base_url: "http://localhost:8080/quote".to_string(),
    ///     ..ClientConfig::default()
    /// })?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .build()
            .map_err(DataError::Network)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Page URL for a symbol and statement kind.
    pub fn statement_url(&self, symbol: &str, kind: StatementKind) -> String {
        format!(
            "{}/{}/financials/{}",
            self.base_url,
            symbol.trim().to_uppercase(),
            kind.url_suffix()
        )
    }

    /// Download the raw page for one statement kind.
    ///
    /// # Errors
    /// `DataError::InvalidSymbol` for an empty symbol, `DataError::Network`
    /// on transport failure and `DataError::Http` on a non-200 status.
    pub async fn fetch_html(&self, symbol: &str, kind: StatementKind) -> Result<String> {
        if symbol.trim().is_empty() {
            return Err(DataError::InvalidSymbol("Empty symbol".to_string()));
        }

        let url = self.statement_url(symbol, kind);
        debug!(%url, kind = kind.key(), "fetching statement page");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(DataError::Network)?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(DataError::Http {
                status: status.as_u16(),
                url,
            });
        }

        response.text().await.map_err(DataError::Network)
    }

    /// Fetch, extract and normalize one statement kind.
    pub async fn fetch_statement(
        &self,
        symbol: &str,
        kind: StatementKind,
    ) -> Result<NormalizedStatement> {
        let html = self.fetch_html(symbol, kind).await?;
        let raw = RawTable::from_html(&html)?;
        debug!(
            kind = kind.key(),
            header_levels = raw.header.len(),
            rows = raw.rows.len(),
            "extracted statement table"
        );
        normalize(&raw)
    }

    /// Fetch every statement kind of a symbol.
    ///
    /// A failure for one kind is recorded in [`StatementFetch::failures`] and
    /// does not stop the remaining kinds.
    ///
    /// # Errors
    /// Only `DataError::InvalidSymbol`, for an empty symbol.
    pub async fn fetch_all(&self, symbol: &str) -> Result<StatementFetch> {
        self.fetch_kinds(symbol, &StatementKind::all()).await
    }

    /// Fetch the given statement kinds of a symbol, in order.
    pub async fn fetch_kinds(&self, symbol: &str, kinds: &[StatementKind]) -> Result<StatementFetch> {
        let symbol = symbol.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(DataError::InvalidSymbol("Empty symbol".to_string()));
        }

        let mut fetch = StatementFetch::new(symbol.clone());
        for &kind in kinds {
            let result = self.fetch_statement(&symbol, kind).await;
            if let Err(e) = &result {
                warn!(symbol = %symbol, kind = kind.key(), error = %e, "statement unavailable");
            }
            fetch.record(kind, self.statement_url(&symbol, kind), result);
        }

        Ok(fetch)
    }
}

impl std::fmt::Debug for StatementClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatementClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> StatementClient {
        StatementClient::with_config(ClientConfig {
            base_url: base.to_string(),
            ..ClientConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_statement_urls() {
        let client = StatementClient::new().unwrap();
        assert_eq!(
            client.statement_url("psx", StatementKind::IncomeStatement),
            "https://stockanalysis.com/quote/PSX/financials/"
        );
        assert_eq!(
            client.statement_url("PSX", StatementKind::BalanceSheet),
            "https://stockanalysis.com/quote/PSX/financials/balance-sheet/"
        );
        assert_eq!(
            client.statement_url("PSX", StatementKind::CashFlow),
            "https://stockanalysis.com/quote/PSX/financials/cash-flow-statement/"
        );
        assert_eq!(
            client.statement_url("PSX", StatementKind::Ratios),
            "https://stockanalysis.com/quote/PSX/financials/ratios/"
        );
    }

    #[test]
    fn test_trailing_slash_in_base() {
        let client = client("http://localhost:1234/quote/");
        assert_eq!(
            client.statement_url("AGP", StatementKind::Ratios),
            "http://localhost:1234/quote/AGP/financials/ratios/"
        );
    }

    #[tokio::test]
    async fn test_empty_symbol() {
        let client = StatementClient::new().unwrap();
        let result = client.fetch_all("  ").await;
        assert!(matches!(result, Err(DataError::InvalidSymbol(_))));

        let result = client.fetch_html("", StatementKind::Ratios).await;
        assert!(matches!(result, Err(DataError::InvalidSymbol(_))));
    }
}

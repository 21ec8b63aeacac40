//! Request/response handlers for each user action.
//!
//! Every handler takes the state it needs as parameters: the fetch
//! handler builds a fresh [`StatementSet`](valuescope_data::StatementSet)
//! per call and the valuation handlers act on a [`ValuationPanel`] owned by
//! the caller. [`Session`] bundles that state for an interactive loop.

mod command;
mod panel;

pub use command::Command;
pub use panel::ValuationPanel;

use crate::universe::Universe;
use thiserror::Error;
use tracing::debug;
use valuescope_data::{DataError, StatementClient, StatementFetch, StatementKind};
use valuescope_output::{ViewOptions, format_valuation, render_failures, render_selected};
use valuescope_valuation::{ValuationError, ValuationMethod, ValuationResult};

/// Errors surfaced to the user for one action. None ends the session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Symbol outside the ticker universe
    #[error("Unknown ticker: {0}")]
    UnknownTicker(String),

    /// Unrecognized command verb
    #[error("Unknown command: {0} (type 'help')")]
    UnknownCommand(String),

    /// Malformed command arguments
    #[error("Usage: {0}")]
    Usage(String),

    /// Fetch or parse failure
    #[error(transparent)]
    Data(#[from] DataError),

    /// Invalid valuation input
    #[error(transparent)]
    Valuation(#[from] ValuationError),
}

/// Result type alias for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;

/// A ticker selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerRequest {
    /// Symbol as entered.
    pub symbol: String,
    /// Statement kinds to render, in order.
    pub show: Vec<StatementKind>,
}

/// Outcome of a ticker selection.
#[derive(Debug)]
pub struct TickerResponse {
    /// Fetched statements and per-kind failures.
    pub fetch: StatementFetch,
    /// Failure lines followed by the selected statement views.
    pub view: String,
}

/// Handle a ticker selection: check the symbol against `universe`, fetch
/// every statement kind and render the selected ones.
///
/// # Errors
/// `SessionError::UnknownTicker` for an unlisted symbol. Per-kind fetch and
/// parse failures are reported in the response, not as errors.
pub async fn handle_ticker<U: Universe + ?Sized>(
    client: &StatementClient,
    universe: &U,
    request: &TickerRequest,
    options: &ViewOptions,
) -> Result<TickerResponse> {
    let symbol = universe
        .resolve(&request.symbol)
        .ok_or_else(|| SessionError::UnknownTicker(request.symbol.trim().to_string()))?;
    debug!(%symbol, show = request.show.len(), "ticker selected");

    let fetch = client.fetch_all(&symbol).await?;
    let mut view = render_failures(&fetch.failures);
    view.push_str(&render_selected(&fetch.set, &request.show, options));

    Ok(TickerResponse { fetch, view })
}

/// Outcome of a compute action.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputeResponse {
    /// Computed value.
    pub result: ValuationResult,
    /// Formatted result line.
    pub line: String,
}

/// Handle a compute action on the active method.
///
/// # Errors
/// `SessionError::Valuation` if an input is out of bounds or a formula
/// precondition fails; nothing is computed in that case.
pub fn handle_compute(panel: &mut ValuationPanel, currency: &str) -> Result<ComputeResponse> {
    let result = panel.compute()?;
    Ok(ComputeResponse {
        result,
        line: format_valuation(&result, currency),
    })
}

/// Reply to one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text to show.
    Text(String),
    /// The session is over.
    Quit,
}

/// State of an interactive session: the statement selection, the
/// valuation panel and the collaborators handlers need.
#[derive(Debug)]
pub struct Session<'a, U: ?Sized> {
    client: &'a StatementClient,
    universe: &'a U,
    currency: String,
    options: ViewOptions,
    show: Vec<StatementKind>,
    panel: ValuationPanel,
}

impl<'a, U: Universe + ?Sized> Session<'a, U> {
    /// New session showing every statement kind, with GGM active.
    pub fn new(client: &'a StatementClient, universe: &'a U, currency: impl Into<String>) -> Self {
        Self {
            client,
            universe,
            currency: currency.into(),
            options: ViewOptions::default(),
            show: StatementKind::all().to_vec(),
            panel: ValuationPanel::default(),
        }
    }

    /// Statement kinds rendered on the next ticker selection.
    pub fn show(&self) -> &[StatementKind] {
        &self.show
    }

    /// The valuation panel.
    pub const fn panel(&self) -> &ValuationPanel {
        &self.panel
    }

    /// Parse and run one command line.
    pub async fn execute_line(&mut self, line: &str) -> Result<Reply> {
        let command: Command = line.parse()?;
        self.execute(command).await
    }

    /// Run one command.
    pub async fn execute(&mut self, command: Command) -> Result<Reply> {
        debug!(?command, "executing command");
        let text = match command {
            Command::Ticker(symbol) => {
                let request = TickerRequest {
                    symbol,
                    show: self.show.clone(),
                };
                handle_ticker(self.client, self.universe, &request, &self.options)
                    .await?
                    .view
            }
            Command::Show(kinds) => {
                self.show = kinds;
                if self.show.is_empty() {
                    "No statements selected".to_string()
                } else {
                    let titles: Vec<&str> = self.show.iter().map(|k| k.title()).collect();
                    format!("Showing: {}", titles.join(", "))
                }
            }
            Command::Method(method) => {
                self.panel = std::mem::take(&mut self.panel).switch(method);
                format!("{}\n{}", method.name(), self.describe_inputs())
            }
            Command::Set { key, value } => {
                self.panel.set(&key, value)?;
                format!("{key} = {value}")
            }
            Command::Inputs => format!("{}\n{}", self.panel.method().name(), self.describe_inputs()),
            Command::Compute => handle_compute(&mut self.panel, &self.currency)?.line,
            Command::Symbols => self.universe.symbols().join(" "),
            Command::Help => Command::HELP.to_string(),
            Command::Quit => return Ok(Reply::Quit),
        };
        Ok(Reply::Text(text))
    }

    fn describe_inputs(&self) -> String {
        let method: ValuationMethod = self.panel.method();
        method
            .fields()
            .iter()
            .map(|field| {
                let value = self.panel.input().get(field.key).unwrap_or(field.default);
                format!(
                    "  {:<16} {:<32} {:>12}  ({})",
                    field.key, field.label, value, field.bound
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

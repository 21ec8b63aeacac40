//! Financial statement pages: fetching, table extraction and normalization.
//!
//! A statement goes through three stages:
//! - [`StatementClient`] downloads the page for a symbol and [`StatementKind`]
//! - [`RawTable::from_html`] extracts the first `<table>` as text cells
//! - [`normalize`] reshapes it into a period-by-metric [`NormalizedStatement`]
//!
//! # Example
//!
//! ```no_run
//! use valuescope_data::statements::StatementClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = StatementClient::new()?;
//!     let fetch = client.fetch_all("PSX").await?;
//!
//!     for (kind, statement) in fetch.set.iter() {
//!         println!("{}: {} metrics", kind.title(), statement.metrics().len());
//!     }
//!     for failure in &fetch.failures {
//!         eprintln!("{}", failure);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod kind;
pub mod normalize;
pub mod set;
pub mod table;

pub use client::{BROWSER_USER_AGENT, ClientConfig, DEFAULT_BASE_URL, StatementClient};
pub use kind::StatementKind;
pub use normalize::{
    NormalizedStatement, PERIOD_COLUMN, PERIOD_LABELS, clean_cell, normalize, parse_cell,
};
pub use set::{StatementFailure, StatementFetch, StatementSet};
pub use table::RawTable;

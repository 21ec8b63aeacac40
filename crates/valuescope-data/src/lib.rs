#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/valuescope/valuescope/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod statements;

pub use error::{DataError, Result};
pub use statements::{
    ClientConfig, NormalizedStatement, RawTable, StatementClient, StatementFailure,
    StatementFetch, StatementKind, StatementSet,
};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

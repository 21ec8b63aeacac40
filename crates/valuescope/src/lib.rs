#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/valuescope/valuescope/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod session;
pub mod universe;

// Re-export main types from sub-crates
pub use valuescope_data as data;
pub use valuescope_output as output;
pub use valuescope_valuation as valuation;

pub use session::{
    Command, ComputeResponse, Reply, Session, SessionError, TickerRequest, TickerResponse,
    ValuationPanel, handle_compute, handle_ticker,
};
pub use universe::{Universe, psx::PsxUniverse};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}

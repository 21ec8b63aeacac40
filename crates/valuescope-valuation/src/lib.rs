#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/valuescope/valuescope/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod dcf;
pub mod error;
pub mod ggm;
pub mod input;
pub mod method;
pub mod peg;
pub mod registry;

pub use dcf::{
    DCF_HORIZON_YEARS, DcfInputs, ProjectedCashFlow, discounted_cash_flow, project_cash_flows,
};
pub use error::{Result, ValuationError};
pub use ggm::{GgmInputs, gordon_growth};
pub use input::{Bound, FieldUnit, InputField};
pub use method::{Valuation, ValuationInput, ValuationMethod, ValuationResult};
pub use peg::{PegInputs, peg_ratio};
pub use registry::{MethodInfo, available_methods, get_method_info};

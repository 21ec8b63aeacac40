#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/valuescope/valuescope/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod chart;
pub mod export;
pub mod format;
pub mod metrics;
pub mod report;
pub mod view;

pub use chart::{BarChart, BarPoint, MetricSeries};
pub use export::{ExportError, ExportFormat, Exporter, StatementRecord};
pub use format::{format_amount, format_ratio, format_valuation};
pub use metrics::{chart_feed, chart_metrics};
pub use report::{FailureNote, Report, ReportBuilder, ReportError};
pub use view::{ViewOptions, render_failures, render_selected, render_statement};

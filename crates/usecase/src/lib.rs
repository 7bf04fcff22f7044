//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: reads a report through a [`ReportSource`](fastqc_summary_ports::report::ReportSource)
//!   and reduces it to a summary
//! - [`dto`]: data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::SummarizeReportOutput;
pub use orchestrator::SummarizeReport;

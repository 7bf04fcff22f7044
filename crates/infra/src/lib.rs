// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod archive;
pub mod output;
pub mod persistence;

pub use archive::{REPORT_FILE_NAME, ZipReportSource};
pub use output::{JsonSummaryWriter, OutputTarget};

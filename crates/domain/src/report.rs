//! Section parser for `fastqc_data.txt`.
//!
//! The report is a flat sequence of lines. A module opens with
//! `>>Module Name\tstatus`, may carry `#`-prefixed column headers, holds
//! tab-delimited data rows, and closes with `>>END_MODULE`. Anything outside
//! an open module (the `##FastQC` version banner, stray lines) is ignored.

pub mod markers;
pub mod reader;
mod state;

pub use reader::{SectionReader, parse_sections};

//! `fastqc-summary`: read and base counts from a FastQC report archive.

pub mod app;
pub mod cli;
pub mod config;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

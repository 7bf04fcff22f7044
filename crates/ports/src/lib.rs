//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`report`]: scoped access to the text of a FastQC report
//! - [`output`]: destination for the computed summary
//!
//! These ports keep the use case independent of archives, files and stdout.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod output;
pub mod report;

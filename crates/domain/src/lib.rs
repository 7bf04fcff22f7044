//! # Domain
//!
//! Pure logic over the text of a FastQC `fastqc_data.txt` report:
//!
//! - [`model`]: the [`Section`] record the parser yields
//! - [`report`]: the line-oriented section parser
//! - [`summaries`]: reducers turning one section into one metric
//!
//! Nothing here touches the filesystem; callers hand in any [`std::io::BufRead`].

#![allow(clippy::multiple_crate_versions)]

pub mod model;
pub mod report;
pub mod summaries;

pub use model::{Section, SectionStatus};
pub use report::{SectionReader, parse_sections};
pub use summaries::{summarize_base_count, summarize_read_count};

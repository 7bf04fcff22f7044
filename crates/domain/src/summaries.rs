//! Reducers from one [`Section`] to one metric.

pub mod base_count;
pub mod exact;
pub mod read_count;

pub use base_count::{SEQUENCE_LENGTH_DISTRIBUTION, summarize_base_count};
pub use exact::{CountParseError, parse_whole_count};
pub use read_count::{BASIC_STATISTICS, TOTAL_SEQUENCES, summarize_read_count};

use fastqc_summary_shared_kernel::DomainError;

use crate::model::Section;

pub(crate) fn malformed_row(section: &Section, row: &str, reason: impl Into<String>) -> DomainError {
    DomainError::MalformedRow { section: section.name.clone(), row: row.to_owned(), reason: reason.into() }
}

use fastqc_summary_shared_kernel::{DomainError, DomainResult, ReadCount};

use super::malformed_row;
use crate::model::Section;
use crate::report::markers::FIELD_DELIMITER;

/// Module holding the `Total Sequences` measure.
pub const BASIC_STATISTICS: &str = "Basic Statistics";
/// Measure whose value is the read count.
pub const TOTAL_SEQUENCES: &str = "Total Sequences";

/// Extracts the `Total Sequences` value from a `Basic Statistics` module.
///
/// The first row whose key column is exactly `Total Sequences` wins. No such
/// row is a [`DomainError::MissingRow`]; a matching row with an unreadable
/// value is a [`DomainError::MalformedRow`].
pub fn summarize_read_count(section: &Section) -> DomainResult<ReadCount> {
    let row = section
        .rows
        .iter()
        .find(|row| row.split(FIELD_DELIMITER).next() == Some(TOTAL_SEQUENCES))
        .ok_or_else(|| DomainError::MissingRow {
            metric: "Read count".to_string(),
            key: TOTAL_SEQUENCES.to_string(),
            section: section.name.clone(),
        })?;

    let value = row
        .split(FIELD_DELIMITER)
        .nth(1)
        .ok_or_else(|| malformed_row(section, row, "missing value column"))?;

    value
        .parse::<u64>()
        .map(ReadCount::from)
        .map_err(|err| malformed_row(section, row, format!("invalid read count {value:?}: {err}")))
}

use fastqc_summary_shared_kernel::{BaseCount, DomainError, DomainResult};

use super::exact::parse_whole_count;
use super::malformed_row;
use crate::model::Section;
use crate::report::markers::FIELD_DELIMITER;

/// Module holding the read length frequency table.
pub const SEQUENCE_LENGTH_DISTRIBUTION: &str = "Sequence Length Distribution";

/// Sums `length * count` over a `Sequence Length Distribution` module.
///
/// Every row must be exactly `length\tcount`. Counts are converted with
/// [`parse_whole_count`]; products and the running total use checked
/// arithmetic.
pub fn summarize_base_count(section: &Section) -> DomainResult<BaseCount> {
    section.rows.iter().try_fold(BaseCount::zero(), |total, row| {
        let bases = row_bases(section, row)?;
        total
            .checked_add(bases)
            .ok_or_else(|| DomainError::CountOverflow { section: section.name.clone() })
    })
}

fn row_bases(section: &Section, row: &str) -> DomainResult<u64> {
    let mut fields = row.split(FIELD_DELIMITER);
    let (Some(length), Some(count), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(malformed_row(section, row, "expected exactly two fields: length and count"));
    };

    let length: u64 = length
        .parse()
        .map_err(|err| malformed_row(section, row, format!("invalid length {length:?}: {err}")))?;
    let count = parse_whole_count(count).map_err(|err| malformed_row(section, row, err.to_string()))?;

    length
        .checked_mul(count)
        .ok_or_else(|| DomainError::CountOverflow { section: section.name.clone() })
}

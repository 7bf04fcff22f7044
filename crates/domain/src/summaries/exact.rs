//! Exact conversion of FastQC count cells to integers.
//!
//! FastQC writes counts as doubles: `3.0`, `0.0`, or `1.8361776E7` for large
//! values. Parsing those through `f64` risks silent rounding once the summed
//! totals reach genome scale, so every cell goes through [`Decimal`] and is
//! accepted only when it is a non-negative whole number.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountParseError {
    #[error("{0:?} is not a decimal number")]
    Invalid(String),

    #[error("{0:?} is negative")]
    Negative(String),

    #[error("{0:?} is not a whole number")]
    Fractional(String),

    #[error("{0:?} does not fit in 64 bits")]
    OutOfRange(String),
}

/// Parses `1`, `1.0`, `1.8361776E7` and the like into an exact `u64`.
///
/// ```
/// use fastqc_summary_domain::summaries::parse_whole_count;
///
/// assert_eq!(parse_whole_count("1.8361776E7"), Ok(18_361_776));
/// assert_eq!(parse_whole_count("242.0"), Ok(242));
/// assert!(parse_whole_count("2.5").is_err());
/// ```
pub fn parse_whole_count(text: &str) -> Result<u64, CountParseError> {
    let value = text.trim();
    let parsed = if value.contains(['e', 'E']) {
        Decimal::from_scientific(value)
    } else {
        Decimal::from_str_exact(value)
    };
    let decimal = parsed.map_err(|_| CountParseError::Invalid(value.to_owned()))?;

    if decimal.is_sign_negative() && !decimal.is_zero() {
        return Err(CountParseError::Negative(value.to_owned()));
    }
    if !decimal.fract().is_zero() {
        return Err(CountParseError::Fractional(value.to_owned()));
    }
    decimal.trunc().to_u64().ok_or_else(|| CountParseError::OutOfRange(value.to_owned()))
}

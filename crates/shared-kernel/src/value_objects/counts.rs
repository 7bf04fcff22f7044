// crates/shared-kernel/src/value_objects/counts.rs
use serde::{Deserialize, Serialize};

/// Total number of reads reported by the `Basic Statistics` module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReadCount(u64);

impl ReadCount {
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Default for ReadCount {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<u64> for ReadCount {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<ReadCount> for u64 {
    fn from(value: ReadCount) -> Self {
        value.0
    }
}

impl PartialEq<u64> for ReadCount {
    fn eq(&self, other: &u64) -> bool {
        self.0 == *other
    }
}

/// Total number of bases, the length-weighted sum of a sequence length distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BaseCount(u64);

impl BaseCount {
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Adds `bases`, returning `None` on `u64` overflow.
    #[inline]
    pub const fn checked_add(self, bases: u64) -> Option<Self> {
        match self.0.checked_add(bases) {
            Some(total) => Some(Self(total)),
            None => None,
        }
    }
}

impl Default for BaseCount {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<u64> for BaseCount {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<BaseCount> for u64 {
    fn from(value: BaseCount) -> Self {
        value.0
    }
}

impl PartialEq<u64> for BaseCount {
    fn eq(&self, other: &u64) -> bool {
        self.0 == *other
    }
}

mod display {
    use std::fmt;

    use super::{BaseCount, ReadCount};

    impl fmt::Display for ReadCount {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.value())
        }
    }

    impl fmt::Display for BaseCount {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.value())
        }
    }
}

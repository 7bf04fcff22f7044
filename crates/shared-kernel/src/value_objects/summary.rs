// crates/shared-kernel/src/value_objects/summary.rs
use serde::{Deserialize, Serialize};

use super::{BaseCount, ReadCount};

/// The two metrics extracted from a FastQC report.
///
/// Serializes as `{"read_count": .., "base_count": ..}` in that key order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub read_count: ReadCount,
    pub base_count: BaseCount,
}

impl Summary {
    pub const fn new(read_count: ReadCount, base_count: BaseCount) -> Self {
        Self { read_count, base_count }
    }
}

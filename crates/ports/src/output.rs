// crates/ports/src/output.rs
use fastqc_summary_shared_kernel::{Result, Summary};

/// Port receiving the final summary.
pub trait SummaryWriter: Send + Sync {
    fn write(&self, summary: &Summary) -> Result<()>;
}

// crates/ports/src/report.rs
use std::io::BufRead;

use fastqc_summary_shared_kernel::Result;

/// Visitor invoked with the open report stream.
pub type ReportVisitor<'v> = dyn FnMut(&mut dyn BufRead) -> Result<()> + 'v;

/// Port providing the text of one FastQC report.
///
/// Implementations open the underlying resource, pass the stream to `visit`,
/// and release every handle before returning, whether `visit` consumed the
/// whole stream, stopped early, or failed.
pub trait ReportSource: Send + Sync {
    /// Human-readable origin used in logs and error context.
    fn origin(&self) -> String;

    fn with_report(&self, visit: &mut ReportVisitor<'_>) -> Result<()>;
}

use fastqc_summary_shared_kernel::Summary;

/// Result of [`SummarizeReport::run`](crate::SummarizeReport::run).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarizeReportOutput {
    pub summary: Summary,
    /// Sections the report contained, required or not.
    pub sections_read: usize,
}

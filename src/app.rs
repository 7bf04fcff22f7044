use anyhow::Result;
use fastqc_summary_infra::{JsonSummaryWriter, OutputTarget, ZipReportSource};
use fastqc_summary_ports::output::SummaryWriter;
use fastqc_summary_shared_kernel::{ErrorContext, Summary};
use fastqc_summary_usecase::SummarizeReport;
use log::debug;

use crate::config::Config;

/// Summarizes the configured archive and writes the JSON result.
pub fn run(config: &Config) -> Result<Summary> {
    let source = ZipReportSource::new(&config.archive);
    let output = SummarizeReport::new(&source).run()?;
    debug!("{} sections read from {}", output.sections_read, config.archive.display());

    JsonSummaryWriter::new(config.output.clone())
        .write(&output.summary)
        .with_context(|| match &config.output {
            OutputTarget::Stdout => "failed to write summary to stdout".to_string(),
            OutputTarget::File(path) => format!("failed to write summary to {}", path.display()),
        })?;
    Ok(output.summary)
}

use std::io::BufRead;

use fastqc_summary_domain::summaries::{
    BASIC_STATISTICS, SEQUENCE_LENGTH_DISTRIBUTION, summarize_base_count, summarize_read_count,
};
use fastqc_summary_domain::{Section, SectionReader};
use fastqc_summary_ports::report::ReportSource;
use fastqc_summary_shared_kernel::{ApplicationError, ErrorContext, Result, Summary};
use log::{debug, info};

use crate::dto::SummarizeReportOutput;

pub struct SummarizeReport<'a> {
    source: &'a dyn ReportSource,
}

impl<'a> SummarizeReport<'a> {
    pub fn new(source: &'a dyn ReportSource) -> Self {
        Self { source }
    }

    pub fn run(&self) -> Result<SummarizeReportOutput> {
        let selected = self.select_sections()?;
        let sections_read = selected.sections_read;
        let basic_statistics = selected.require_basic_statistics()?;
        let length_distribution = selected.require_length_distribution()?;

        let read_count = summarize_read_count(basic_statistics)?;
        let base_count = summarize_base_count(length_distribution)?;
        info!("{}: read_count={read_count} base_count={base_count}", self.source.origin());

        Ok(SummarizeReportOutput { summary: Summary::new(read_count, base_count), sections_read })
    }

    /// Reads the whole report, so a decode error anywhere in it is fatal.
    fn select_sections(&self) -> Result<SelectedSections> {
        let mut selected = SelectedSections::default();

        self.source
            .with_report(&mut |reader: &mut dyn BufRead| {
                for section in SectionReader::new(reader) {
                    selected.offer(section?);
                }
                debug!("report ended after {} sections", selected.sections_read);
                Ok(())
            })
            .with_context(|| format!("failed to read report from {}", self.source.origin()))?;

        Ok(selected)
    }
}

#[derive(Debug, Default)]
struct SelectedSections {
    basic_statistics: Option<Section>,
    length_distribution: Option<Section>,
    sections_read: usize,
}

impl SelectedSections {
    /// A later occurrence of a required module replaces an earlier one.
    fn offer(&mut self, section: Section) {
        self.sections_read += 1;
        let slot = match section.name.as_str() {
            BASIC_STATISTICS => &mut self.basic_statistics,
            SEQUENCE_LENGTH_DISTRIBUTION => &mut self.length_distribution,
            _ => return,
        };
        if slot.is_some() {
            debug!("module '{}' repeated; keeping the later copy", section.name);
        }
        *slot = Some(section);
    }

    fn require_basic_statistics(&self) -> Result<&Section> {
        require(self.basic_statistics.as_ref(), BASIC_STATISTICS)
    }

    fn require_length_distribution(&self) -> Result<&Section> {
        require(self.length_distribution.as_ref(), SEQUENCE_LENGTH_DISTRIBUTION)
    }
}

fn require<'s>(section: Option<&'s Section>, name: &str) -> Result<&'s Section> {
    section.ok_or_else(|| ApplicationError::SectionMissing { section: name.to_string() }.into())
}

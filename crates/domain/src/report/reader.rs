use std::io::{self, BufRead};
use std::iter::FusedIterator;

use fastqc_summary_shared_kernel::{DomainError, DomainResult};
use log::{debug, trace};

use super::state::ParserState;
use crate::model::Section;

/// Lazy, single-pass iterator over the finalized sections of a report.
///
/// Each call to `next` reads only as many lines as it takes to close the next
/// module. Once the underlying reader reports EOF or any error the
/// iterator is exhausted; re-reading requires a fresh reader.
///
/// # Examples
///
/// ```
/// use fastqc_summary_domain::report::SectionReader;
///
/// let report = "##FastQC\t0.12.1\n>>Basic Statistics\tpass\n#Measure\tValue\nTotal Sequences\t0\n>>END_MODULE\n";
/// let sections: Vec<_> = SectionReader::new(report.as_bytes()).collect::<Result<_, _>>().unwrap();
///
/// assert_eq!(sections.len(), 1);
/// assert_eq!(sections[0].name, "Basic Statistics");
/// ```
pub struct SectionReader<R> {
    reader: R,
    line_buf: String,
    line_number: usize,
    state: ParserState,
    exhausted: bool,
}

impl<R: BufRead> SectionReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_buf: String::with_capacity(256),
            line_number: 0,
            state: ParserState::Closed,
            exhausted: false,
        }
    }

    /// Number of lines consumed so far (1-based once reading starts).
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

/// Convenience constructor mirroring [`SectionReader::new`].
pub fn parse_sections<R: BufRead>(reader: R) -> SectionReader<R> {
    SectionReader::new(reader)
}

impl<R: BufRead> Iterator for SectionReader<R> {
    type Item = DomainResult<Section>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        loop {
            self.line_buf.clear();

            match self.reader.read_line(&mut self.line_buf) {
                Ok(0) => {
                    self.exhausted = true;
                    std::mem::take(&mut self.state).finish();
                    trace!("report exhausted after {} lines", self.line_number);
                    return None;
                }
                Ok(_) => {
                    self.line_number += 1;
                    let line = self.line_buf.trim_end();
                    let (next, finished) = std::mem::take(&mut self.state).advance(line);
                    self.state = next;

                    if let Some(section) = finished {
                        debug!(
                            "module '{}' ({}) closed at line {} with {} rows",
                            section.name,
                            section.status,
                            self.line_number,
                            section.rows.len()
                        );
                        return Some(Ok(section));
                    }
                }
                Err(source) => {
                    self.exhausted = true;
                    let line = self.line_number + 1;
                    return Some(Err(if source.kind() == io::ErrorKind::InvalidData {
                        DomainError::Decode { line, source }
                    } else {
                        DomainError::Read { line, source }
                    }));
                }
            }
        }
    }
}

impl<R: BufRead> FusedIterator for SectionReader<R> {}

// crates/infra/src/archive.rs
use std::{
    io::BufReader,
    path::{Path, PathBuf},
};

use fastqc_summary_ports::report::{ReportSource, ReportVisitor};
use fastqc_summary_shared_kernel::{InfraResult, InfrastructureError, Result};
use log::{debug, info};
use zip::ZipArchive;

use crate::persistence::FileReader;

/// Name FastQC gives the report inside its `_fastqc.zip` archive.
pub const REPORT_FILE_NAME: &str = "fastqc_data.txt";

/// Reads `fastqc_data.txt` straight out of a FastQC ZIP archive.
///
/// The archive is opened afresh on every [`ReportSource::with_report`] call
/// and closed before it returns.
#[derive(Debug, Clone)]
pub struct ZipReportSource {
    path: PathBuf,
}

impl ZipReportSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Validates the archive and returns the name of its single report entry.
    pub fn report_entry(&self) -> InfraResult<String> {
        let archive = self.open_archive()?;
        locate_report_entry(&self.path, archive.file_names()).map(str::to_owned)
    }

    fn open_archive(&self) -> InfraResult<ZipArchive<BufReader<std::fs::File>>> {
        if !self.path.exists() {
            return Err(InfrastructureError::ArchiveNotFound { path: self.path.clone() });
        }
        let reader = FileReader::open_buffered(&self.path)
            .map_err(|source| InfrastructureError::FileRead { path: self.path.clone(), source })?;
        ZipArchive::new(reader).map_err(|err| InfrastructureError::InvalidArchive {
            path: self.path.clone(),
            details: err.to_string(),
        })
    }
}

impl ReportSource for ZipReportSource {
    fn origin(&self) -> String {
        self.path.display().to_string()
    }

    fn with_report(&self, visit: &mut ReportVisitor<'_>) -> Result<()> {
        let mut archive = self.open_archive()?;
        debug!("opened {} ({} entries)", self.path.display(), archive.len());

        let entry_name = locate_report_entry(&self.path, archive.file_names())?.to_owned();
        let entry = archive.by_name(&entry_name).map_err(|err| InfrastructureError::ArchiveEntry {
            archive: self.path.clone(),
            entry: entry_name.clone(),
            details: err.to_string(),
        })?;
        info!("reading {entry_name} from {}", self.path.display());

        let mut reader = BufReader::new(entry);
        visit(&mut reader)
    }
}

/// Picks the single entry whose name ends with [`REPORT_FILE_NAME`].
pub fn locate_report_entry<'n>(
    archive: &Path,
    names: impl IntoIterator<Item = &'n str>,
) -> InfraResult<&'n str> {
    let mut candidates: Vec<&str> = names.into_iter().filter(|name| name.ends_with(REPORT_FILE_NAME)).collect();

    match candidates.len() {
        0 => Err(InfrastructureError::ReportNotFound {
            archive: archive.to_path_buf(),
            file_name: REPORT_FILE_NAME.to_string(),
        }),
        1 => Ok(candidates.remove(0)),
        _ => Err(InfrastructureError::AmbiguousReport {
            archive: archive.to_path_buf(),
            file_name: REPORT_FILE_NAME.to_string(),
            candidates: candidates.into_iter().map(str::to_owned).collect(),
        }),
    }
}

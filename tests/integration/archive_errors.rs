use fastqc_summary_infra::ZipReportSource;
use fastqc_summary_shared_kernel::{FastqcSummaryError, InfrastructureError};
use fastqc_summary_usecase::SummarizeReport;

use crate::common::write_archive;

fn run(source: &ZipReportSource) -> FastqcSummaryError {
    SummarizeReport::new(source).run().unwrap_err()
}

#[test]
fn archive_without_report() {
    let dir = tempfile::tempdir().unwrap();
    let archive = write_archive(&dir.path().join("other.zip"), &[("other_file.txt", "x"), ("data.csv", "a,b")]);

    let message = run(&ZipReportSource::new(&archive)).to_string();
    assert!(message.starts_with("fastqc_data.txt not found in archive"), "{message}");
}

#[test]
fn archive_with_two_reports() {
    let dir = tempfile::tempdir().unwrap();
    let archive = write_archive(
        &dir.path().join("multi.zip"),
        &[("sample1/fastqc_data.txt", ""), ("sample2/fastqc_data.txt", "")],
    );

    match run(&ZipReportSource::new(&archive)) {
        FastqcSummaryError::Infrastructure(InfrastructureError::AmbiguousReport { candidates, .. }) => {
            assert_eq!(candidates, ["sample1/fastqc_data.txt", "sample2/fastqc_data.txt"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_archive_fails_before_parsing() {
    let err = run(&ZipReportSource::new("test_fastqc.zip"));
    assert!(matches!(err, FastqcSummaryError::Infrastructure(InfrastructureError::ArchiveNotFound { .. })));
}

#[test]
fn plain_text_is_not_an_archive() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fastqc_data.txt");
    std::fs::write(&path, "##FastQC\t0.12.1").unwrap();

    let message = run(&ZipReportSource::new(&path)).to_string();
    assert!(message.ends_with("is not a valid ZIP file."), "{message}");
}

use std::path::PathBuf;

use fastqc_summary::{app, config::Config};
use fastqc_summary_infra::{OutputTarget, ZipReportSource};
use fastqc_summary_shared_kernel::Summary;
use fastqc_summary_usecase::SummarizeReport;
use log::LevelFilter;

use crate::common::{fastqc_archive, write_archive};

fn summarize(archive: PathBuf) -> Summary {
    let source = ZipReportSource::new(archive);
    SummarizeReport::new(&source).run().unwrap().summary
}

#[test]
fn sra_run_counts() {
    let dir = tempfile::tempdir().unwrap();
    let summary = summarize(fastqc_archive(dir.path(), "SRR1067505_1"));

    assert_eq!(summary.read_count, 18_361_776u64);
    assert_eq!(summary.base_count, 661_023_936u64);
}

#[test]
fn empty_run_counts_are_zero() {
    let dir = tempfile::tempdir().unwrap();
    let summary = summarize(fastqc_archive(dir.path(), "empty"));

    assert_eq!(summary, Summary::default());
}

#[test]
fn variable_length_run_sums_every_bin() {
    let dir = tempfile::tempdir().unwrap();
    let summary = summarize(fastqc_archive(dir.path(), "ngs_test"));

    assert_eq!(summary.read_count, 50_000u64);
    assert_eq!(summary.base_count, 3_776_539u64);
}

#[test]
fn report_at_archive_root_is_found() {
    let dir = tempfile::tempdir().unwrap();
    let report = crate::common::report_text("SRR1067505_1");
    let archive = write_archive(&dir.path().join("flat.zip"), &[("fastqc_data.txt", report.as_str())]);

    assert_eq!(summarize(archive).read_count, 18_361_776u64);
}

#[test]
fn app_writes_summary_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("SRR1067505_1_fastqc-summary.json");
    let config = Config {
        archive: fastqc_archive(dir.path(), "SRR1067505_1"),
        output: OutputTarget::File(output.clone()),
        log_level: LevelFilter::Warn,
    };

    let summary = app::run(&config).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(written, "{\"read_count\":18361776,\"base_count\":661023936}\n");
    assert_eq!(serde_json::from_str::<Summary>(&written).unwrap(), summary);
}

#[test]
fn missing_length_distribution_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let archive = write_archive(
        &dir.path().join("partial.zip"),
        &[("partial/fastqc_data.txt", ">>Basic Statistics\tpass\nTotal Sequences\t3\n>>END_MODULE\n")],
    );
    let source = ZipReportSource::new(archive);

    let err = SummarizeReport::new(&source).run().unwrap_err();
    assert_eq!(err.to_string(), "'Sequence Length Distribution' module not found in report");
}

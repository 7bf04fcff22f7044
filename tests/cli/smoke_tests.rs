use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::{fastqc_archive, write_archive};

const SRR_JSON: &str = "{\"read_count\":18361776,\"base_count\":661023936}\n";

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_fastqc-summary"))
}

#[test]
fn shows_help() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: fastqc-summary").and(predicate::str::contains("--output")));
}

#[test]
fn archive_argument_is_required() {
    bin().assert().failure().code(2).stderr(predicate::str::contains("Usage"));
}

#[test]
fn prints_summary_to_stdout_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let archive = fastqc_archive(dir.path(), "SRR1067505_1");

    bin().arg(&archive).assert().success().stdout(SRR_JSON);
}

#[test]
fn dash_and_dev_stdout_print_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let archive = fastqc_archive(dir.path(), "empty");

    for target in ["-", "/dev/stdout"] {
        bin()
            .arg(&archive)
            .args(["--output", target])
            .assert()
            .success()
            .stdout("{\"read_count\":0,\"base_count\":0}\n");
    }
}

#[test]
fn output_flag_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let archive = fastqc_archive(dir.path(), "SRR1067505_1");

    for flag in ["-o", "--output"] {
        let output = dir.path().join(format!("summary{flag}.json"));
        bin().arg(&archive).arg(flag).arg(&output).assert().success().stdout("");
        assert_eq!(std::fs::read_to_string(&output).unwrap(), SRR_JSON);
    }
}

#[test]
fn missing_archive_is_reported() {
    bin()
        .arg("test_fastqc.zip")
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("FastQC archive file 'test_fastqc.zip' could not be found."));
}

#[test]
fn non_zip_input_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fastqc_data.txt");
    std::fs::write(&path, "##FastQC\t0.12.1").unwrap();

    bin().arg(&path).assert().failure().stderr(predicate::str::contains("is not a valid ZIP file."));
}

#[test]
fn ambiguous_archive_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let archive = write_archive(
        &dir.path().join("multi.zip"),
        &[("sample1/fastqc_data.txt", ""), ("sample2/fastqc_data.txt", "")],
    );

    bin()
        .arg(&archive)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Multiple fastqc_data.txt files found in archive"));
}

#[test]
fn verbose_logs_go_to_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let archive = fastqc_archive(dir.path(), "ngs_test");

    bin()
        .arg("-v")
        .arg(&archive)
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout("{\"read_count\":50000,\"base_count\":3776539}\n")
        .stderr(predicate::str::contains("read_count=50000"));
}

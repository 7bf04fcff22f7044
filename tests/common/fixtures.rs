#![allow(dead_code)]

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use zip::{ZipWriter, write::SimpleFileOptions};

/// Report text from `tests/data/<name>_fastqc_data.txt`.
pub fn report_text(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data").join(format!("{name}_fastqc_data.txt"));
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("missing fixture {}: {e}", path.display()))
}

/// Writes a ZIP archive with the given `(entry name, contents)` pairs.
pub fn write_archive(path: &Path, entries: &[(&str, &str)]) -> PathBuf {
    let mut writer = ZipWriter::new(File::create(path).unwrap());
    for (name, contents) in entries {
        writer.start_file(*name, SimpleFileOptions::default()).unwrap();
        writer.write_all(contents.as_bytes()).unwrap();
    }
    writer.finish().unwrap();
    path.to_path_buf()
}

/// Packs a `tests/data` report the way FastQC lays out `<name>_fastqc.zip`.
pub fn fastqc_archive(dir: &Path, name: &str) -> PathBuf {
    let report = report_text(name);
    let html = format!("{name}_fastqc/fastqc_report.html");
    let summary = format!("{name}_fastqc/summary.txt");
    let data = format!("{name}_fastqc/fastqc_data.txt");
    write_archive(
        &dir.join(format!("{name}_fastqc.zip")),
        &[
            (html.as_str(), "<html></html>"),
            (summary.as_str(), "PASS\tBasic Statistics\n"),
            (data.as_str(), report.as_str()),
        ],
    )
}

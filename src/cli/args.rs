// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "fastqc-summary",
    version = crate::VERSION,
    about = "Summarize read and base counts from a FastQC report archive",
    long_about = "Reads fastqc_data.txt out of a FastQC _fastqc.zip archive and prints \
                  {\"read_count\": .., \"base_count\": ..} as JSON."
)]
pub struct Args {
    /// Path to the _fastqc.zip archive written by FastQC
    #[arg(value_hint = ValueHint::FilePath)]
    pub fastqc_archive: PathBuf,

    /// Where to write the JSON summary (`-` or /dev/stdout for standard output)
    #[arg(short, long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub output: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
